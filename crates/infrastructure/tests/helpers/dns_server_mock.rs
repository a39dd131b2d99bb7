use hickory_proto::op::{Message, MessageType, ResponseCode};
use hickory_proto::rr::rdata::TXT;
use hickory_proto::rr::{RData, Record, RecordType};
use hickory_proto::serialize::binary::{BinDecodable, BinEncodable};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::UdpSocket;
use tokio::sync::{oneshot, RwLock};

/// TXT answers keyed by lower-case name without the trailing dot. Each
/// entry is one record made of one or more character strings.
type Zone = Arc<RwLock<HashMap<String, Vec<Vec<String>>>>>;

/// In-process UDP DNS server answering TXT queries from a fixed zone.
///
/// Names in the zone get their records, anything else gets NXDOMAIN.
pub struct MockDnsServer {
    addr: SocketAddr,
    zone: Zone,
    queries: Arc<RwLock<Vec<String>>>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    /// Binds to an ephemeral port on 127.0.0.1.
    pub async fn start() -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = socket.local_addr()?;

        let zone: Zone = Arc::new(RwLock::new(HashMap::new()));
        let queries = Arc::new(RwLock::new(Vec::new()));
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        let zone_task = zone.clone();
        let queries_task = queries.clone();
        tokio::spawn(async move {
            let mut buf = vec![0u8; 4096];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        let Ok((len, peer)) = result else { continue };
                        let Ok(request) = Message::from_bytes(&buf[..len]) else { continue };

                        let response =
                            Self::answer(&request, &zone_task, &queries_task).await;
                        if let Ok(bytes) = response.to_bytes() {
                            let _ = socket.send_to(&bytes, peer).await;
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            zone,
            queries,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Adds one TXT record for `name`.
    pub async fn add_txt(&self, name: &str, strings: &[&str]) {
        self.zone
            .write()
            .await
            .entry(normalize(name))
            .or_default()
            .push(strings.iter().map(|s| s.to_string()).collect());
    }

    /// Names queried so far, in arrival order.
    pub async fn queries(&self) -> Vec<String> {
        self.queries.read().await.clone()
    }

    async fn answer(
        request: &Message,
        zone: &Zone,
        queries: &Arc<RwLock<Vec<String>>>,
    ) -> Message {
        let mut response = Message::new();
        response
            .set_id(request.id())
            .set_message_type(MessageType::Response)
            .set_op_code(request.op_code())
            .set_recursion_desired(request.recursion_desired())
            .set_recursion_available(true);

        let Some(query) = request.queries().first() else {
            response.set_response_code(ResponseCode::FormErr);
            return response;
        };
        response.add_query(query.clone());

        let name = normalize(&query.name().to_ascii());
        queries.write().await.push(name.clone());

        let zone = zone.read().await;
        match zone.get(&name) {
            Some(records) if query.query_type() == RecordType::TXT => {
                for strings in records {
                    response.add_answer(Record::from_rdata(
                        query.name().clone(),
                        60,
                        RData::TXT(TXT::new(strings.clone())),
                    ));
                }
                response.set_response_code(ResponseCode::NoError);
            }
            Some(_) => {
                response.set_response_code(ResponseCode::NoError);
            }
            None => {
                response.set_authoritative(true);
                response.set_response_code(ResponseCode::NXDomain);
            }
        }

        response
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

fn normalize(name: &str) -> String {
    name.trim_end_matches('.').to_lowercase()
}

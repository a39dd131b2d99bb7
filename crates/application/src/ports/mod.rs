pub mod document_parser;
pub mod document_processor;
pub mod http_probe;
pub mod local_files;
pub mod public_suffix_list;
pub mod txt_record_lookup;

pub use document_parser::DocumentParser;
pub use document_processor::DocumentProcessor;
pub use http_probe::{HttpProbe, HttpResponse, RequestOptions};
pub use local_files::LocalFiles;
pub use public_suffix_list::PublicSuffixList;
pub use txt_record_lookup::TxtRecordLookup;

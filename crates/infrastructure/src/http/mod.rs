pub mod probe;

pub use probe::ReqwestHttpProbe;

pub mod http_hashing_client;
pub mod memory_record;

pub mod hashing_client;

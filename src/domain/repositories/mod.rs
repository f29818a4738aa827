pub mod host_record;

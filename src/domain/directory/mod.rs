pub mod network_directory;

pub mod version_file;

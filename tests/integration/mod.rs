mod config_files;
mod pull_request_tables;
mod reviewer_tables;

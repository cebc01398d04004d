pub mod match_info;

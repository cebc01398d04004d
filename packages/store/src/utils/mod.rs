pub mod video_host;

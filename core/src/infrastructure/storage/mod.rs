pub mod local_media_storage;

pub mod qr_writer;

pub use qr_writer::QrImageWriter;

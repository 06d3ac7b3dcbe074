use std::io::{self, BufWriter, Read, Seek, SeekFrom, Write};

use error_defer::traits::Close;
use error_defer::with_resource;

/// A writer whose flush always fails, standing in for a full disk.
struct FullDisk;

impl Write for FullDisk {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::Other, "disk full"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::Other, "disk full"))
    }
}

#[test]
fn file_close_syncs() {
    let mut file = tempfile::tempfile().unwrap();
    file.write_all(b"payload").unwrap();
    assert!(file.close().is_ok());
}

#[test]
fn buf_writer_close_flushes_into_inner() {
    let mut file = tempfile::tempfile().unwrap();
    let mut writer = BufWriter::new(file.try_clone().unwrap());
    writer.write_all(b"buffered").unwrap();
    writer.close().unwrap();

    let mut contents = String::new();
    file.seek(SeekFrom::Start(0)).unwrap();
    file.read_to_string(&mut contents).unwrap();
    assert_eq!(contents, "buffered");
}

#[test]
fn buf_writer_close_reports_flush_failure() {
    let mut writer = BufWriter::new(FullDisk);
    writer.write_all(b"never lands").unwrap();

    let err = writer.close().unwrap_err();
    assert_eq!(err.to_string(), "disk full");
}

#[test]
fn with_resource_surfaces_buffered_write_failure() {
    let result: io::Result<usize> = with_resource(BufWriter::new(FullDisk), |writer| {
        writer.write_all(b"report")?;
        Ok(6)
    });

    assert_eq!(result.unwrap_err().to_string(), "disk full");
}

#[test]
fn tcp_stream_close_shuts_down() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let client = std::net::TcpStream::connect(addr).unwrap();
    let (_server, _) = listener.accept().unwrap();

    assert!(client.close().is_ok());
}

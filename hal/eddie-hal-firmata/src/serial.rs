//! Serial port access
//!
//! Opens a tty device in raw mode at the requested line settings. The
//! port is blocking; the board reader runs on its own thread with a clone
//! of the handle.

#![allow(unsafe_code)]

use std::fs::{File, OpenOptions};
use std::io::{self, Read, Write};
use std::mem;
use std::os::unix::fs::OpenOptionsExt;
use std::os::unix::io::{AsRawFd, RawFd};
use std::path::Path;

use eddie_hal::uart::{Parity, StopBits};
use eddie_hal::{UartConfig, UartRx, UartTx};

use crate::error::LinkError;

/// An open serial device
#[derive(Debug)]
pub struct SerialPort {
    file: File,
}

impl SerialPort {
    /// Open `path` and apply `config`
    pub fn open(path: impl AsRef<Path>, config: &UartConfig) -> Result<Self, LinkError> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .custom_flags(libc::O_NOCTTY)
            .open(path)?;

        configure(file.as_raw_fd(), config)?;

        Ok(Self { file })
    }

    /// Second handle to the same device, for the reader thread
    pub fn try_clone(&self) -> Result<Self, LinkError> {
        Ok(Self {
            file: self.file.try_clone()?,
        })
    }
}

impl UartTx for SerialPort {
    type Error = io::Error;

    fn write_blocking(&mut self, data: &[u8]) -> Result<(), io::Error> {
        self.file.write_all(data)
    }

    fn flush(&mut self) -> Result<(), io::Error> {
        self.file.flush()
    }
}

impl UartRx for SerialPort {
    type Error = io::Error;

    fn read_blocking(&mut self, buf: &mut [u8]) -> Result<usize, io::Error> {
        loop {
            match self.file.read(buf) {
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                other => return other,
            }
        }
    }
}

/// termios speed constant for a baud rate
fn speed(baudrate: u32) -> Result<libc::speed_t, LinkError> {
    Ok(match baudrate {
        9_600 => libc::B9600,
        19_200 => libc::B19200,
        38_400 => libc::B38400,
        57_600 => libc::B57600,
        115_200 => libc::B115200,
        other => return Err(LinkError::UnsupportedBaud(other)),
    })
}

/// Put the tty in raw mode with the given line settings
fn configure(fd: RawFd, config: &UartConfig) -> Result<(), LinkError> {
    let speed = speed(config.baudrate)?;

    // SAFETY: termios is a plain C struct; zeroed is a valid baseline and
    // tcgetattr fills it before use.
    let mut tty: libc::termios = unsafe { mem::zeroed() };
    // SAFETY: fd is an open descriptor owned by the caller's File.
    if unsafe { libc::tcgetattr(fd, &mut tty) } != 0 {
        return Err(io::Error::last_os_error().into());
    }

    // SAFETY: tty points to a valid termios value.
    unsafe {
        libc::cfmakeraw(&mut tty);
        libc::cfsetispeed(&mut tty, speed);
        libc::cfsetospeed(&mut tty, speed);
    }

    tty.c_cflag |= libc::CLOCAL | libc::CREAD;
    tty.c_cflag &= !libc::CRTSCTS;

    tty.c_cflag &= !(libc::PARENB | libc::PARODD);
    match config.parity {
        Parity::None => {}
        Parity::Even => tty.c_cflag |= libc::PARENB,
        Parity::Odd => tty.c_cflag |= libc::PARENB | libc::PARODD,
    }
    match config.stop_bits {
        StopBits::One => tty.c_cflag &= !libc::CSTOPB,
        StopBits::Two => tty.c_cflag |= libc::CSTOPB,
    }

    // Block until at least one byte arrives
    tty.c_cc[libc::VMIN] = 1;
    tty.c_cc[libc::VTIME] = 0;

    // SAFETY: fd is open and tty is fully initialized.
    if unsafe { libc::tcsetattr(fd, libc::TCSANOW, &tty) } != 0 {
        return Err(io::Error::last_os_error().into());
    }
    // SAFETY: fd is open; discarding stale input is always valid.
    unsafe {
        libc::tcflush(fd, libc::TCIOFLUSH);
    }
    Ok(())
}

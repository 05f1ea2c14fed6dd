//! Transport for serial servers which accept raw Pelco-D frames over UDP.
//!
//! Each frame is sent as a single datagram. Nothing is ever read back.
use crate::{protocol::PelcoFrame, Error, Result};
use std::net::{Ipv4Addr, SocketAddrV4};
use tokio::net::{ToSocketAddrs, UdpSocket};

#[derive(Debug, Default)]
pub struct PelcoUdpChannel {
    sock: Option<UdpSocket>,
}

impl PelcoUdpChannel {
    pub fn new() -> Self {
        Self { sock: None }
    }

    pub async fn connect<A: ToSocketAddrs>(&mut self, addr: A) -> Result {
        let sock = UdpSocket::bind(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, 0)).await?;
        sock.connect(addr).await?;
        debug!("connected to {:?}", sock.peer_addr()?);
        self.sock = Some(sock);
        Ok(())
    }

    pub async fn send(&self, frame: &PelcoFrame) -> Result {
        let sock = self.sock.as_ref().ok_or(Error::ChannelUnavailable)?;
        trace!("sending {frame}");
        sock.send(&frame.to_bytes()).await?;
        Ok(())
    }
}

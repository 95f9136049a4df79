/// One hop of an agent forwarding chain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ForwardingNotice {
    pub remote_hostname: String,
    pub remote_ip: String,
    pub remote_port: u16,
}

impl ForwardingNotice {
    pub fn new(remote_hostname: &str, remote_ip: &str, remote_port: u16) -> Self {
        Self {
            remote_hostname: remote_hostname.into(),
            remote_ip: remote_ip.into(),
            remote_port,
        }
    }
}

impl std::fmt::Display for ForwardingNotice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}:{})",
            self.remote_hostname, self.remote_ip, self.remote_port
        )
    }
}

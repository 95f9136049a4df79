use super::*;
use crate::algorithm::*;
use crate::util::codec::*;

/// SSH_MSG_KEXINIT (RFC 4253 7.1)
#[derive(Debug, Clone, PartialEq)]
pub struct MsgKexInit {
    pub cookie: KexCookie,
    pub kex_algorithms: Vec<String>,
    pub server_host_key_algorithms: Vec<String>,
    pub encryption_algorithms_client_to_server: Vec<String>,
    pub encryption_algorithms_server_to_client: Vec<String>,
    pub mac_algorithms_client_to_server: Vec<String>,
    pub mac_algorithms_server_to_client: Vec<String>,
    pub compression_algorithms_client_to_server: Vec<String>,
    pub compression_algorithms_server_to_client: Vec<String>,
    pub languages_client_to_server: Vec<String>,
    pub languages_server_to_client: Vec<String>,
    pub first_packet_follows: bool,
}

impl MsgKexInit {
    /// Build a message from the supported algorithms with each preferred algorithm moved to
    /// the front of its list.
    ///
    /// The cookie is fresh, the language lists are empty and `first_packet_follows` is false.
    pub fn new(algorithms: &Algorithms, preferences: &KexPreferences) -> Self {
        let p = preferences;
        let kex = algorithms.kex.supported_names();
        let pk = algorithms.public_key.supported_names();
        let enc = algorithms.cipher.supported_names();
        let mac = algorithms.mac.supported_names();
        let comp = algorithms.compression.supported_names();
        Self {
            cookie: KexCookie::random(),
            kex_algorithms: bias_to_front(&kex, &p.kex),
            server_host_key_algorithms: bias_to_front(&pk, &p.public_key),
            encryption_algorithms_client_to_server: bias_to_front(
                &enc,
                &p.encryption_client_to_server,
            ),
            encryption_algorithms_server_to_client: bias_to_front(
                &enc,
                &p.encryption_server_to_client,
            ),
            mac_algorithms_client_to_server: bias_to_front(&mac, &p.mac_client_to_server),
            mac_algorithms_server_to_client: bias_to_front(&mac, &p.mac_server_to_client),
            compression_algorithms_client_to_server: bias_to_front(
                &comp,
                &p.compression_client_to_server,
            ),
            compression_algorithms_server_to_client: bias_to_front(
                &comp,
                &p.compression_server_to_client,
            ),
            languages_client_to_server: vec![],
            languages_server_to_client: vec![],
            first_packet_follows: false,
        }
    }

    /// Replace the host key algorithm list and move the registry's default to the front.
    pub fn set_supported_public_keys(
        &mut self,
        names: Vec<String>,
        registry: &AlgorithmRegistry<dyn PublicKeyAlgorithm>,
    ) {
        self.server_host_key_algorithms = bias_to_front(&names, registry.default_name());
    }

    /// The complete payload including the message number.
    pub fn to_bytes(&self) -> Result<Vec<u8>, KexInitError> {
        Ok(encode_message(self)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, KexInitError> {
        Ok(decode_message::<Self>(bytes)?)
    }
}

/// Move `preferred` to the front if it is contained in `supported`.
///
/// The relative order of all other elements is preserved.
pub fn bias_to_front<S: AsRef<str>>(supported: &[S], preferred: &str) -> Vec<String> {
    let mut front = vec![];
    let mut rest = Vec::with_capacity(supported.len());
    for s in supported.iter().map(|s| s.as_ref()) {
        if front.is_empty() && s == preferred {
            front.push(s.to_string())
        } else {
            rest.push(s.to_string())
        }
    }
    front.append(&mut rest);
    front
}

impl Message for MsgKexInit {
    const NUMBER: u8 = 20;
}

impl SshEncode for MsgKexInit {
    fn encode<E: SshEncoder>(&self, e: &mut E) -> Option<()> {
        e.push(&self.cookie)?;
        e.push_name_list(&self.kex_algorithms)?;
        e.push_name_list(&self.server_host_key_algorithms)?;
        e.push_name_list(&self.encryption_algorithms_client_to_server)?;
        e.push_name_list(&self.encryption_algorithms_server_to_client)?;
        e.push_name_list(&self.mac_algorithms_client_to_server)?;
        e.push_name_list(&self.mac_algorithms_server_to_client)?;
        e.push_name_list(&self.compression_algorithms_client_to_server)?;
        e.push_name_list(&self.compression_algorithms_server_to_client)?;
        e.push_name_list(&self.languages_client_to_server)?;
        e.push_name_list(&self.languages_server_to_client)?;
        e.push_bool(self.first_packet_follows)?;
        e.push_u32be(0)
    }
}

impl SshDecode for MsgKexInit {
    fn decode<'a, D: SshDecoder<'a>>(d: &mut D) -> Option<Self> {
        fn names<'a, D: SshDecoder<'a>>(d: &mut D) -> Option<Vec<String>> {
            Some(d.take_name_list()?.into_iter().map(String::from).collect())
        }
        let r = Self {
            cookie: d.take()?,
            kex_algorithms: names(d)?,
            server_host_key_algorithms: names(d)?,
            encryption_algorithms_client_to_server: names(d)?,
            encryption_algorithms_server_to_client: names(d)?,
            mac_algorithms_client_to_server: names(d)?,
            mac_algorithms_server_to_client: names(d)?,
            compression_algorithms_client_to_server: names(d)?,
            compression_algorithms_server_to_client: names(d)?,
            languages_client_to_server: names(d)?,
            languages_server_to_client: names(d)?,
            first_packet_follows: d.take_bool()?,
        };
        // Reserved for future extension
        d.take_u32be()?;
        Some(r)
    }
}

impl std::fmt::Display for MsgKexInit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let lists = [
            ("kex", &self.kex_algorithms),
            ("server host key", &self.server_host_key_algorithms),
            ("encryption c2s", &self.encryption_algorithms_client_to_server),
            ("encryption s2c", &self.encryption_algorithms_server_to_client),
            ("mac c2s", &self.mac_algorithms_client_to_server),
            ("mac s2c", &self.mac_algorithms_server_to_client),
            ("compression c2s", &self.compression_algorithms_client_to_server),
            ("compression s2c", &self.compression_algorithms_server_to_client),
            ("languages c2s", &self.languages_client_to_server),
            ("languages s2c", &self.languages_server_to_client),
        ];
        writeln!(f, "SSH_MSG_KEXINIT {:?}", self.cookie)?;
        for (label, names) in lists.iter() {
            writeln!(f, "  {}: {}", label, names.join(","))?;
        }
        write!(f, "  first kex packet follows: {}", self.first_packet_follows)
    }
}

use clap::{Arg, Command};
use sshbroker::algorithm::*;
use sshbroker::transport::*;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let matches = Command::new("kexinit")
        .about("Print the SSH_MSG_KEXINIT this host would send")
        .arg(
            Arg::new("cipher")
                .long("cipher")
                .takes_value(true)
                .env("SSHBROKER_CIPHER")
                .help("Default cipher"),
        )
        .arg(
            Arg::new("mac")
                .long("mac")
                .takes_value(true)
                .env("SSHBROKER_MAC")
                .help("Default MAC"),
        )
        .arg(
            Arg::new("mac-extension")
                .long("mac-extension")
                .takes_value(true)
                .multiple_occurrences(true)
                .help("Additional MAC as NAME=IMPLEMENTATION (e.g. hmac-x@example.com=HmacSha256)"),
        )
        .get_matches();

    let mut config = AlgorithmConfig::default();
    config.cipher.default_algorithm = matches.value_of("cipher").map(String::from);
    config.mac.default_algorithm = matches.value_of("mac").map(String::from);
    for ext in matches.values_of("mac-extension").into_iter().flatten() {
        match ext.split_once('=') {
            Some((name, implementation)) => config
                .mac
                .extensions
                .push(ExtensionAlgorithm::new(name, implementation)),
            None => log::warn!("Ignoring malformed extension {:?}", ext),
        }
    }

    let algorithms = Algorithms::new(&config, &Catalog::builtin())?;
    let preferences = KexPreferences::from_defaults(&algorithms);
    let msg = MsgKexInit::new(&algorithms, &preferences);
    let bytes = msg.to_bytes()?;

    println!("{}", msg);
    for line in bytes.chunks(16) {
        let hex: Vec<String> = line.iter().map(|b| format!("{:02x}", b)).collect();
        println!("{}", hex.join(" "));
    }
    Ok(())
}

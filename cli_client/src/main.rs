use chat_crypto::{derive_session_key, Algorithm, ChatSession, ChatSettings};
use clap::{Args, Parser, Subcommand};
use dh_crypto::{DiffieHellman, KeyExchangeAlgorithm};
use log::{info, warn};
use num_bigint::BigUint;
use std::error::Error;
use std::path::PathBuf;
use std::time::Duration;
use symmetric_cipher::{CipherMode, CipherTask, PaddingMode};

#[derive(Parser)]
#[command(name = "cli_client", about = "Key agreement and file encryption")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a Diffie-Hellman key pair
    Keygen,
    /// Derive a session key from our private exponent and the peer's public value
    Agree {
        #[arg(long)]
        private: String,
        #[arg(long)]
        peer: String,
        #[arg(long, default_value = "LOKI97")]
        algorithm: Algorithm,
    },
    /// Encrypt a file
    Encrypt(FileArgs),
    /// Decrypt a file
    Decrypt(FileArgs),
}

#[derive(Args)]
struct FileArgs {
    #[arg(long, default_value = "LOKI97")]
    algorithm: Algorithm,
    #[arg(long, default_value = "CBC")]
    mode: CipherMode,
    #[arg(long, default_value = "PKCS7")]
    padding: PaddingMode,
    /// Session key, hex
    #[arg(long)]
    key: String,
    /// IV, hex; generated and printed when encrypting without one
    #[arg(long)]
    iv: Option<String>,
    #[arg(short, long)]
    input: PathBuf,
    #[arg(short, long)]
    output: PathBuf,
}

impl FileArgs {
    fn session(&self, encrypting: bool) -> Result<ChatSession, Box<dyn Error>> {
        let settings = match &self.iv {
            Some(iv) => ChatSettings::new(self.algorithm, self.mode, self.padding, hex::decode(iv)?)?,
            None if encrypting => {
                let settings = ChatSettings::generate(self.algorithm, self.mode, self.padding, &mut rand::rng());
                println!("iv: {}", hex::encode(&settings.iv));
                settings
            }
            None => return Err("--iv is required for decryption".into()),
        };
        Ok(ChatSession::new(settings, &hex::decode(&self.key)?)?)
    }
}

/// Prints progress until the task finishes; Ctrl-C cancels it.
async fn drive(mut task: CipherTask<()>) -> Result<(), Box<dyn Error>> {
    let progress = task.progress();
    let mut ticker = tokio::time::interval(Duration::from_millis(200));
    loop {
        tokio::select! {
            result = &mut task => {
                eprintln!("\r{:5.1}%", progress.percent());
                return Ok(result?);
            }
            _ = tokio::signal::ctrl_c(), if !progress.is_cancelled() => {
                warn!("interrupted, cancelling");
                progress.cancel();
            }
            _ = ticker.tick() => eprint!("\r{:5.1}%", progress.percent()),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Keygen => {
            let dh = DiffieHellman::standard();
            let pair = dh.generate_keypair(&mut rand::rng());
            println!("private: {}", hex::encode(pair.private_key.to_bytes_be()));
            println!("public:  {}", hex::encode(pair.public_key_bytes()));
        }
        Command::Agree {
            private,
            peer,
            algorithm,
        } => {
            let dh = DiffieHellman::standard();
            let own = dh.restore_keypair(BigUint::from_bytes_be(&hex::decode(private)?))?;
            let peer = BigUint::from_bytes_be(&hex::decode(peer)?);
            let secret = dh.compute_shared_secret(&own.private_key, &peer)?;
            println!("key: {}", hex::encode(derive_session_key(&secret, algorithm.key_len())));
        }
        Command::Encrypt(args) => {
            let session = args.session(true)?;
            drive(session.encrypt_file(args.input.clone(), args.output.clone())?).await?;
            info!("encrypted {} -> {}", args.input.display(), args.output.display());
        }
        Command::Decrypt(args) => {
            let session = args.session(false)?;
            drive(session.decrypt_file(args.input.clone(), args.output.clone())?).await?;
            info!("decrypted {} -> {}", args.input.display(), args.output.display());
        }
    }

    Ok(())
}

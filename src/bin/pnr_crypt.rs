use anyhow::Result;
use clap::{Parser, Subcommand};
use pnr_status::{Code, PayloadCipher};

/// Inspect the payloads exchanged with the status service.
#[derive(Parser)]
#[command(name = "pnr-crypt")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the base64 payload sent for a PNR
    Encrypt { pnr: String },
    /// Recover the PNR from a base64 payload
    Decrypt { payload: String },
}

fn main() -> Result<()> {
    let args = Args::parse();
    let cipher = PayloadCipher::default();

    match args.command {
        Command::Encrypt { pnr } => {
            let code = Code::parse(&pnr)?;
            println!("{}", cipher.encrypt_code(&code).as_str());
        }
        Command::Decrypt { payload } => {
            println!("{}", cipher.decrypt_payload(&payload)?);
        }
    }

    Ok(())
}

use cardward::reader::RequestReader;
use cardward::validator::{TransactionValidator, ValidationConfig};
use cardward::writer::ResponseWriter;
use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input transaction requests CSV file
    input: PathBuf,

    /// Treat requests as gift-card transactions (informational; gift-card
    /// status is detected from the request itself)
    #[arg(long)]
    gift: bool,

    /// Decline requests identical to one already processed
    #[arg(long)]
    check_duplicate: bool,

    /// Decline requests whose expiration date has passed
    #[arg(long)]
    validate_expiration: bool,

    /// Decline requests without a "First Last" cardholder name
    #[arg(long)]
    require_cardholder_name: bool,

    /// Approve without charging a processing fee
    #[arg(long)]
    waive_fee: bool,

    /// Require a signature even on declined transactions
    #[arg(long)]
    always_require_signature: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = ValidationConfig {
        gift: cli.gift,
        check_duplicate: cli.check_duplicate,
        validate_expiration: cli.validate_expiration,
        require_cardholder_name: cli.require_cardholder_name,
        waive_fee: cli.waive_fee,
        always_require_signature: cli.always_require_signature,
    };

    let mut validator = TransactionValidator::new();

    let file = File::open(cli.input).into_diagnostic()?;
    let reader = RequestReader::new(file);

    let stdout = io::stdout();
    let mut writer = ResponseWriter::new(stdout.lock());

    for request_result in reader.requests() {
        match request_result {
            Ok(request) => {
                let response = validator.process(request, &config);
                writer.write_response(&response).into_diagnostic()?;
            }
            Err(e) => {
                eprintln!("Error reading request: {}", e);
            }
        }
    }

    writer.flush().into_diagnostic()?;
    Ok(())
}

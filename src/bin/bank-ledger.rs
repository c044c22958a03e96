use std::fs::File;

use anyhow::{Context, Result};
use bank_ledger::{
    bin_utils::{Service, ServiceError, View, logging},
    config::LedgerConfig,
};

fn main() -> Result<()> {
    logging::init();

    let mut args = std::env::args().skip(1);
    let filename = args
        .next()
        .context("Expected a script file name as the first argument")?;
    let mut view = match args.next() {
        Some(name) => name.parse::<View>()?,
        None => View::Accounts(None),
    };
    if let Some(customer) = args.next() {
        let View::Accounts(filter) = &mut view else {
            anyhow::bail!("A customer id can only be given for the `accounts` view");
        };
        *filter = Some(
            customer
                .parse()
                .with_context(|| format!("Invalid customer id `{customer}`"))?,
        );
    }
    let file = File::open(&filename).with_context(|| format!("Failed to open `{filename}`"))?;

    let service = Service {
        input: file,
        output: &mut std::io::stdout(),
        config: LedgerConfig::default(),
        view,
        error_printer: Box::new(|line, err| {
            match err {
                ServiceError::CommandErr(err) => eprintln!("Error at line {line}: {err}"),
                ServiceError::LedgerErr(_) => {
                    // rejections are business outcomes and already sit in the transaction log
                }
            }
        }),
    };
    service.run()
}

use std::io::Read;

use crate::{
    command::{CommandArgs, CommandError, CommandKind, LedgerCommand},
    customer::CustomerId,
};
use csv::{DeserializeRecordsIntoIter, Trim};
use rust_decimal::Decimal;
use serde::Deserialize;

/// One line of a command script: `command,customer,name,account,to,amount`.
#[derive(Debug, Deserialize)]
pub struct ScriptRow {
    #[serde(rename = "command")]
    pub kind: CommandKind,
    pub customer: Option<CustomerId>,
    pub name: Option<String>,
    pub account: Option<String>,
    pub to: Option<String>,
    pub amount: Option<Decimal>,
}

impl ScriptRow {
    pub fn into_command(self) -> Result<LedgerCommand, CommandError> {
        LedgerCommand::parse_command(
            self.kind,
            CommandArgs {
                customer: self.customer,
                name: self.name,
                account: self.account,
                to: self.to,
                amount: self.amount,
            },
        )
    }
}

/// Parses a command script in CSV format, yielding each row with its line number.
pub struct CsvScriptParser<R> {
    iter: DeserializeRecordsIntoIter<R, ScriptRow>,
}

impl<R> CsvScriptParser<R>
where
    R: Read,
{
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(source);

        Self {
            iter: reader.into_deserialize(),
        }
    }
}

impl<R> Iterator for CsvScriptParser<R>
where
    R: Read,
{
    type Item = (u64, csv::Result<ScriptRow>);

    fn next(&mut self) -> Option<Self::Item> {
        let curr_line = self.iter.reader().position().line();
        self.iter.next().map(|row| (curr_line, row))
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn parses_short_and_padded_rows() {
        let script = "\
command,customer,name,account,to,amount
customer,, Ivan Petrov
debit,1
deposit,,,ACC1001,, 500
transfer,,,ACC1001,ACC1002,-1.5
";
        let rows: Vec<_> = CsvScriptParser::new(script.as_bytes())
            .map(|(line, row)| (line, row.unwrap()))
            .collect();
        assert_eq!(rows.len(), 4);

        let (line, customer) = &rows[0];
        assert_eq!(*line, 2);
        assert_eq!(customer.kind, CommandKind::Customer);
        assert_eq!(customer.name.as_deref(), Some("Ivan Petrov"));
        assert_eq!(customer.amount, None);

        let (_, debit) = &rows[1];
        assert_eq!(debit.customer, Some(1));
        assert_eq!(debit.account, None);

        let (_, deposit) = &rows[2];
        assert_eq!(deposit.amount, Some(dec!(500)));

        let (line, transfer) = &rows[3];
        assert_eq!(*line, 5);
        assert_eq!(transfer.to.as_deref(), Some("ACC1002"));
        assert_eq!(transfer.amount, Some(dec!(-1.5)));
    }

    #[test]
    fn unknown_command_is_a_row_error() {
        let script = "command,customer\nclose,1\n";
        let (line, row) = CsvScriptParser::new(script.as_bytes()).next().unwrap();
        assert_eq!(line, 2);
        assert!(row.is_err());
    }
}

use thiserror::Error;

/// Internal issues with stored data indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored transaction carries a type other than `INCOME` or `EXPENSE`.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Transaction '{id}' has unknown type '{value}'")]
    UnknownTransactionType {
        /// Id of the transaction row
        id: String,
        /// The stored type string
        value: String,
    },
}

use crate::schema::transactions;
use chrono::NaiveDateTime;
use diesel::backend::Backend;
use diesel::deserialize::{self, FromSql, FromSqlRow};
use diesel::expression::AsExpression;
use diesel::prelude::*;
use diesel::serialize::{self, IsNull, Output, ToSql};
use diesel::sql_types::Text;
use diesel::sqlite::Sqlite;
use serde::{Deserialize, Serialize};

/// Direction of a money movement. The amount itself is always non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsExpression, FromSqlRow)]
#[diesel(sql_type = Text)]
pub enum TransactionType {
    #[serde(rename = "IN")]
    In,
    #[serde(rename = "OUT")]
    Out,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::In => "IN",
            TransactionType::Out => "OUT",
        }
    }
}

impl ToSql<Text, Sqlite> for TransactionType {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Sqlite>) -> serialize::Result {
        out.set_value(self.as_str());
        Ok(IsNull::No)
    }
}

impl FromSql<Text, Sqlite> for TransactionType {
    fn from_sql(bytes: <Sqlite as Backend>::RawValue<'_>) -> deserialize::Result<Self> {
        let value = <String as FromSql<Text, Sqlite>>::from_sql(bytes)?;
        match value.as_str() {
            "IN" => Ok(TransactionType::In),
            "OUT" => Ok(TransactionType::Out),
            other => Err(format!("Unknown transaction type: {}", other).into()),
        }
    }
}

#[derive(Queryable, Identifiable, Insertable, Debug, Clone, PartialEq)]
#[diesel(table_name = transactions)]
pub struct Transaction {
    pub id: String,
    pub user_id: String,
    pub amount_cents: i64,
    pub kind: TransactionType,
    pub category: String,
    pub description: String,
    pub date: NaiveDateTime,
}

#[derive(Deserialize, Debug)]
pub struct CreateTransactionRequest {
    #[serde(with = "crate::money::cents")]
    pub amount: i64,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub category: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TransactionOut {
    pub id: String,
    #[serde(with = "crate::money::cents")]
    pub amount: i64,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub category: String,
    pub description: String,
    pub date: NaiveDateTime,
}

impl From<Transaction> for TransactionOut {
    fn from(transaction: Transaction) -> Self {
        TransactionOut {
            id: transaction.id,
            amount: transaction.amount_cents,
            kind: transaction.kind,
            category: transaction.category,
            description: transaction.description,
            date: transaction.date,
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct BalanceOut {
    #[serde(serialize_with = "crate::money::serialize_wide_cents")]
    pub balance: i128,
}

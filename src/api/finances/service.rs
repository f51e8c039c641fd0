use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;
use uuid::Uuid;

use super::models::{CreateTransactionRequest, Transaction, TransactionType};
use crate::error::ServiceError;
use crate::money::check_amount;
use crate::schema::transactions;

/// Full history of `owner`, newest first.
pub fn find_all(c: &mut SqliteConnection, owner: &str) -> Result<Vec<Transaction>, ServiceError> {
    Ok(transactions::table
        .filter(transactions::user_id.eq(owner))
        .order(transactions::date.desc())
        .load::<Transaction>(c)?)
}

/// Income minus expenses, in cents. An empty history balances to zero.
/// Summed as `i128` so no history of `i64` amounts can overflow.
pub fn balance(history: &[Transaction]) -> i128 {
    history
        .iter()
        .fold(0i128, |acc, transaction| {
            let amount = i128::from(transaction.amount_cents);
            match transaction.kind {
                TransactionType::In => acc + amount,
                TransactionType::Out => acc - amount,
            }
        })
}

pub fn get_balance(c: &mut SqliteConnection, owner: &str) -> Result<i128, ServiceError> {
    let history = find_all(c, owner)?;
    Ok(balance(&history))
}

pub fn create(
    c: &mut SqliteConnection,
    request: &CreateTransactionRequest,
    owner: &str,
) -> Result<Transaction, ServiceError> {
    check_amount(request.amount, "Amount")?;
    let category = request.category.trim();
    if category.is_empty() {
        return Err(ServiceError::Validation("Category is required".to_string()));
    }

    let transaction = Transaction {
        id: Uuid::new_v4().to_string(),
        user_id: owner.to_string(),
        amount_cents: request.amount,
        kind: request.kind,
        category: category.to_string(),
        description: request.description.trim().to_string(),
        date: Utc::now().naive_utc(),
    };

    diesel::insert_into(transactions::table)
        .values(&transaction)
        .execute(c)?;

    Ok(transaction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::MAX_AMOUNT_CENTS;
    use crate::test_support::{connection, insert_user};
    use proptest::prelude::*;
    use rstest::rstest;

    fn entry(amount_cents: i64, kind: TransactionType) -> Transaction {
        Transaction {
            id: Uuid::new_v4().to_string(),
            user_id: "user".to_string(),
            amount_cents,
            kind,
            category: "misc".to_string(),
            description: String::new(),
            date: Utc::now().naive_utc(),
        }
    }

    fn request(amount: i64, kind: TransactionType) -> CreateTransactionRequest {
        CreateTransactionRequest {
            amount,
            kind,
            category: "Food".to_string(),
            description: "Market".to_string(),
        }
    }

    #[test]
    fn empty_history_balances_to_zero() {
        assert_eq!(balance(&[]), 0);
    }

    #[test]
    fn income_minus_expenses() {
        let history = [
            entry(10_000, TransactionType::In),
            entry(3_000, TransactionType::Out),
            entry(2_000, TransactionType::Out),
        ];
        assert_eq!(balance(&history), 5000);
    }

    #[test]
    fn balance_can_go_negative() {
        let history = [entry(1_055, TransactionType::In), entry(2_000, TransactionType::Out)];
        assert_eq!(balance(&history), -945);
    }

    #[test]
    fn huge_histories_do_not_overflow() {
        let history = [entry(i64::MAX, TransactionType::In), entry(i64::MAX, TransactionType::In)];
        assert_eq!(balance(&history), 2 * i128::from(i64::MAX));

        let history = [
            entry(i64::MAX, TransactionType::Out),
            entry(i64::MAX, TransactionType::Out),
            entry(1, TransactionType::In),
        ];
        assert_eq!(balance(&history), 1 - 2 * i128::from(i64::MAX));
    }

    proptest! {
        #[test]
        fn balance_is_income_sum_minus_expense_sum(
            entries in proptest::collection::vec((0i64..=i64::MAX, any::<bool>()), 0..64)
        ) {
            let history: Vec<_> = entries
                .iter()
                .map(|&(amount, income)| {
                    entry(amount, if income { TransactionType::In } else { TransactionType::Out })
                })
                .collect();

            let income: i128 = entries.iter().filter(|e| e.1).map(|e| i128::from(e.0)).sum();
            let expenses: i128 = entries.iter().filter(|e| !e.1).map(|e| i128::from(e.0)).sum();

            prop_assert_eq!(balance(&history), income - expenses);
        }
    }

    #[rstest]
    fn balance_is_scoped_to_the_owner(mut connection: SqliteConnection) {
        let ana = insert_user(&mut connection, "ana@example.com");
        let bob = insert_user(&mut connection, "bob@example.com");

        create(&mut connection, &request(10_000, TransactionType::In), &ana).unwrap();
        create(&mut connection, &request(3_000, TransactionType::Out), &ana).unwrap();
        create(&mut connection, &request(2_000, TransactionType::Out), &ana).unwrap();
        create(&mut connection, &request(99_900, TransactionType::In), &bob).unwrap();

        assert_eq!(get_balance(&mut connection, &ana).unwrap(), 5000);
        assert_eq!(get_balance(&mut connection, &bob).unwrap(), 99_900);
        assert_eq!(find_all(&mut connection, &ana).unwrap().len(), 3);
    }

    #[rstest]
    fn stored_type_round_trips(mut connection: SqliteConnection) {
        let owner = insert_user(&mut connection, "ana@example.com");
        let created = create(&mut connection, &request(1_234, TransactionType::Out), &owner).unwrap();

        let loaded = find_all(&mut connection, &owner).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, created.id);
        assert_eq!(loaded[0].kind, TransactionType::Out);
        assert_eq!(loaded[0].amount_cents, 1_234);
    }

    #[rstest]
    fn rejects_negative_amounts_and_blank_categories(mut connection: SqliteConnection) {
        let owner = insert_user(&mut connection, "ana@example.com");

        assert!(matches!(
            create(&mut connection, &request(-1, TransactionType::In), &owner),
            Err(ServiceError::Validation(_))
        ));
        assert!(matches!(
            create(&mut connection, &request(MAX_AMOUNT_CENTS + 1, TransactionType::In), &owner),
            Err(ServiceError::Validation(_))
        ));
        assert!(find_all(&mut connection, &owner).unwrap().is_empty());

        let blank = CreateTransactionRequest {
            category: " ".to_string(),
            ..request(500, TransactionType::In)
        };
        assert!(matches!(
            create(&mut connection, &blank, &owner),
            Err(ServiceError::Validation(_))
        ));
    }
}

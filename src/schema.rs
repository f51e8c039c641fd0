diesel::table! {
    list_items (id) {
        id -> Text,
        list_id -> Text,
        name -> Text,
        qty -> Integer,
        price_cents -> BigInt,
        checked -> Bool,
        created_at -> Timestamp,
    }
}

diesel::table! {
    lists (id) {
        id -> Text,
        user_id -> Text,
        title -> Text,
        created_at -> Timestamp,
    }
}

diesel::table! {
    products (barcode) {
        barcode -> Text,
        name -> Text,
        price_cents -> BigInt,
        image -> Nullable<Text>,
    }
}

diesel::table! {
    transactions (id) {
        id -> Text,
        user_id -> Text,
        amount_cents -> BigInt,
        kind -> Text,
        category -> Text,
        description -> Text,
        date -> Timestamp,
    }
}

diesel::table! {
    users (id) {
        id -> Text,
        name -> Text,
        email -> Text,
        password_hash -> Text,
        created_at -> Timestamp,
        updated_at -> Timestamp,
    }
}

diesel::joinable!(list_items -> lists (list_id));
diesel::joinable!(lists -> users (user_id));
diesel::joinable!(transactions -> users (user_id));

diesel::allow_tables_to_appear_in_same_query!(
    list_items,
    lists,
    products,
    transactions,
    users,
);

diesel::table! {
    artists (id) {
        id -> Int4,
        #[max_length = 255]
        name -> Varchar,
        birth_year -> Nullable<Int4>,
        #[max_length = 255]
        origin -> Nullable<Varchar>,
        #[max_length = 255]
        specialty -> Nullable<Varchar>,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    artworks (id) {
        id -> Int4,
        #[max_length = 255]
        title -> Varchar,
        artist_id -> Int4,
        description -> Text,
        price -> Numeric,
        #[max_length = 20]
        status -> Varchar,
        image_url -> Nullable<Text>,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    orders (id) {
        id -> Int4,
        #[max_length = 255]
        customer_name -> Varchar,
        #[max_length = 255]
        customer_email -> Varchar,
        #[max_length = 50]
        customer_phone -> Varchar,
        artwork_id -> Int4,
        shipping_address -> Text,
        notes -> Text,
        #[max_length = 50]
        status -> Varchar,
        created_at -> Timestamptz,
    }
}

// Read-only view joining each artwork with its artist's display fields.
diesel::table! {
    artwork_full_info (id) {
        id -> Int4,
        #[max_length = 255]
        title -> Varchar,
        artist_id -> Int4,
        description -> Text,
        price -> Numeric,
        #[max_length = 20]
        status -> Varchar,
        image_url -> Nullable<Text>,
        created_at -> Timestamptz,
        #[max_length = 255]
        artist_name -> Varchar,
        artist_birth_year -> Nullable<Int4>,
        #[max_length = 255]
        artist_origin -> Nullable<Varchar>,
        #[max_length = 255]
        artist_specialty -> Nullable<Varchar>,
    }
}

diesel::joinable!(artworks -> artists (artist_id));
diesel::joinable!(orders -> artworks (artwork_id));

diesel::allow_tables_to_appear_in_same_query!(artists, artworks, orders,);

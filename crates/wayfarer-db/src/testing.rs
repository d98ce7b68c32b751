//! Test fixtures: the travel schema and a small seeded catalogue.
//!
//! Only compiled for tests. The library itself never writes.

use sqlx::SqlitePool;

use crate::pool::{Database, DbConfig};

const SCHEMA: &[&str] = &[
    "CREATE TABLE countries (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL
    )",
    "CREATE TABLE destinations (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        country_id INTEGER NOT NULL REFERENCES countries(id),
        city TEXT NOT NULL
    )",
    "CREATE TABLE hotels (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        destination_id INTEGER NOT NULL REFERENCES destinations(id),
        name TEXT NOT NULL,
        stars INTEGER NOT NULL
    )",
    "CREATE TABLE rooms (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        hotel_id INTEGER NOT NULL REFERENCES hotels(id),
        capacity INTEGER NOT NULL
    )",
    "CREATE TABLE trip_packages (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        price_per_person_cents INTEGER NOT NULL
    )",
    "CREATE TABLE package_itineraries (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        package_id INTEGER NOT NULL REFERENCES trip_packages(id),
        destination_id INTEGER NOT NULL REFERENCES destinations(id)
    )",
];

/// An in-memory database with the travel schema and no rows.
pub async fn travel_database() -> Database {
    let db = Database::new(DbConfig::in_memory()).await.unwrap();
    for statement in SCHEMA {
        sqlx::query(statement).execute(db.pool()).await.unwrap();
    }
    db
}

/// The travel schema seeded with three packages, inserted out of name order.
///
/// ```text
/// Riviera Escape  France       Nice     Hotel Azur        4★  rooms 2, 4  499.00
/// Alpine Retreat  Switzerland  Zermatt  Matterhorn Lodge  5★  room  2     1299.00
/// Berlin Weekend  Germany      Berlin   Spree Inn         3★  room  2     299.00
/// ```
pub async fn seeded_database() -> Database {
    let db = travel_database().await;

    FixturePackage::new("Riviera Escape")
        .located("France", "Nice")
        .hotel("Hotel Azur", 4)
        .rooms(&[2, 4])
        .price_cents(49900)
        .insert(&db)
        .await;
    FixturePackage::new("Alpine Retreat")
        .located("Switzerland", "Zermatt")
        .hotel("Matterhorn Lodge", 5)
        .price_cents(129900)
        .insert(&db)
        .await;
    FixturePackage::new("Berlin Weekend")
        .located("Germany", "Berlin")
        .hotel("Spree Inn", 3)
        .price_cents(29900)
        .insert(&db)
        .await;

    db
}

/// One package with its own country, destination, hotel and rooms.
pub struct FixturePackage {
    name: String,
    country: String,
    city: String,
    hotel: String,
    stars: i64,
    rooms: Vec<i64>,
    price_cents: i64,
}

impl FixturePackage {
    pub fn new(name: &str) -> Self {
        FixturePackage {
            name: name.to_string(),
            country: "Testland".to_string(),
            city: "Testville".to_string(),
            hotel: "Test Hotel".to_string(),
            stars: 3,
            rooms: vec![2],
            price_cents: 10000,
        }
    }

    pub fn located(mut self, country: &str, city: &str) -> Self {
        self.country = country.to_string();
        self.city = city.to_string();
        self
    }

    pub fn hotel(mut self, name: &str, stars: i64) -> Self {
        self.hotel = name.to_string();
        self.stars = stars;
        self
    }

    pub fn rooms(mut self, capacities: &[i64]) -> Self {
        self.rooms = capacities.to_vec();
        self
    }

    pub fn price_cents(mut self, cents: i64) -> Self {
        self.price_cents = cents;
        self
    }

    pub async fn insert(self, db: &Database) {
        let pool = db.pool();

        let country_id = insert(pool, "INSERT INTO countries (name) VALUES (?1)", |q| {
            q.bind(self.country.clone())
        })
        .await;
        let destination_id = insert(
            pool,
            "INSERT INTO destinations (country_id, city) VALUES (?1, ?2)",
            |q| q.bind(country_id).bind(self.city.clone()),
        )
        .await;
        let hotel_id = insert(
            pool,
            "INSERT INTO hotels (destination_id, name, stars) VALUES (?1, ?2, ?3)",
            |q| q.bind(destination_id).bind(self.hotel.clone()).bind(self.stars),
        )
        .await;
        for capacity in &self.rooms {
            insert(
                pool,
                "INSERT INTO rooms (hotel_id, capacity) VALUES (?1, ?2)",
                |q| q.bind(hotel_id).bind(*capacity),
            )
            .await;
        }
        let package_id = insert(
            pool,
            "INSERT INTO trip_packages (name, price_per_person_cents) VALUES (?1, ?2)",
            |q| q.bind(self.name.clone()).bind(self.price_cents),
        )
        .await;
        insert(
            pool,
            "INSERT INTO package_itineraries (package_id, destination_id) VALUES (?1, ?2)",
            |q| q.bind(package_id).bind(destination_id),
        )
        .await;
    }
}

type SqliteQuery<'q> = sqlx::query::Query<'q, sqlx::Sqlite, sqlx::sqlite::SqliteArguments<'q>>;

async fn insert<'q>(
    pool: &SqlitePool,
    sql: &'q str,
    bind: impl FnOnce(SqliteQuery<'q>) -> SqliteQuery<'q>,
) -> i64 {
    bind(sqlx::query(sql))
        .execute(pool)
        .await
        .unwrap()
        .last_insert_rowid()
}

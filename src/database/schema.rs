//! Esquema del almacén
//!
//! Tres tablas. `AUTOINCREMENT` impide reutilizar identificadores tras un
//! borrado; las ventas restringen el borrado de autos y clientes referenciados.
//! Las fechas por defecto usan el reloj local, igual que las que llegan del usuario.

pub const CREATE_VEHICLES: &str = r#"
    CREATE TABLE IF NOT EXISTS vehicles (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        brand TEXT NOT NULL,
        model TEXT NOT NULL,
        year INTEGER NOT NULL,
        price REAL NOT NULL,
        color TEXT NOT NULL,
        transmission TEXT NOT NULL,
        fuel TEXT NOT NULL,
        image TEXT,
        registered_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%d %H:%M:%f', 'now', 'localtime'))
    )
"#;

pub const CREATE_CUSTOMERS: &str = r#"
    CREATE TABLE IF NOT EXISTS customers (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        phone TEXT,
        email TEXT,
        address TEXT
    )
"#;

pub const CREATE_SALES: &str = r#"
    CREATE TABLE IF NOT EXISTS sales (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        vehicle_id INTEGER NOT NULL REFERENCES vehicles(id) ON DELETE RESTRICT,
        customer_id INTEGER NOT NULL REFERENCES customers(id) ON DELETE RESTRICT,
        amount REAL NOT NULL,
        payment_method TEXT NOT NULL,
        sold_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%d %H:%M:%f', 'now', 'localtime'))
    )
"#;

/// Sentencias en orden de dependencia
pub const STATEMENTS: [&str; 3] = [CREATE_VEHICLES, CREATE_CUSTOMERS, CREATE_SALES];

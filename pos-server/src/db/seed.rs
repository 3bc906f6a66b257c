//! Seed data: a clean restaurant with five free tables and a starter menu

use super::repository::{RepoResult, dining_table, employee, product};
use shared::models::{DiningTableCreate, EmployeeCreate, ProductCreate, TableStatus};
use sqlx::SqlitePool;

const TABLE_COUNT: i32 = 5;

/// Counts of what [`seed`] inserted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub tables: usize,
    pub products: usize,
    pub employees: usize,
}

fn starter_menu() -> Vec<ProductCreate> {
    vec![
        ProductCreate {
            name: "Risoto Funghi".into(),
            description: Some("Cremoso risoto com cogumelos funghi secchi hidratados.".into()),
            price: 45.50,
            category: "prato_principal".into(),
        },
        ProductCreate {
            name: "Refrigerante Lata".into(),
            description: Some("Coca-Cola, Guaraná ou outros".into()),
            price: 6.00,
            category: "bebida".into(),
        },
        ProductCreate {
            name: "Pudim de Leite".into(),
            description: Some("Pudim de leite condensado com calda de caramelo".into()),
            price: 12.00,
            category: "sobremesa".into(),
        },
    ]
}

/// Wipe every table and insert the starter data in one transaction
pub async fn seed(pool: &SqlitePool, default_employee: EmployeeCreate) -> RepoResult<SeedSummary> {
    let mut tx = pool.begin().await?;

    for table in ["comanda_item", "comanda", "product", "dining_table", "employee"] {
        sqlx::query(&format!("DELETE FROM {table}"))
            .execute(&mut *tx)
            .await?;
    }
    tracing::info!("Database wiped");

    for number in 1..=TABLE_COUNT {
        dining_table::create(
            &mut tx,
            DiningTableCreate {
                number,
                status: Some(TableStatus::Free),
            },
        )
        .await?;
    }

    let menu = starter_menu();
    let products = menu.len();
    for item in menu {
        product::create(&mut *tx, item).await?;
    }

    employee::create(&mut *tx, default_employee).await?;

    tx.commit().await?;

    let summary = SeedSummary {
        tables: TABLE_COUNT as usize,
        products,
        employees: 1,
    };
    tracing::info!(
        tables = summary.tables,
        products = summary.products,
        employees = summary.employees,
        "Seed data inserted"
    );
    Ok(summary)
}

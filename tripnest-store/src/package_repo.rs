use async_trait::async_trait;
use sqlx::{postgres::PgArguments, query::QueryAs, PgPool, Postgres, QueryBuilder};
use tripnest_catalog::{PackageQuery, Predicate};
use tripnest_core::repository::{PackageRepository, RepoResult};
use tripnest_shared::{NewPackage, Package};

const PACKAGE_COLUMNS: &str =
    "id, title, description, image_url, price, duration, category, sub_category, destination";

pub struct PostgresPackageRepository {
    pool: PgPool,
}

impl PostgresPackageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const INSERT_PACKAGE: &str = r#"
    INSERT INTO packages (title, description, image_url, price, duration, category, sub_category, destination)
    VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
    RETURNING id, title, description, image_url, price, duration, category, sub_category, destination
"#;

// Internal struct for type-safe querying
#[derive(sqlx::FromRow)]
struct PackageRow {
    id: i32,
    title: String,
    description: String,
    image_url: String,
    price: i32,
    duration: i32,
    category: String,
    sub_category: String,
    destination: String,
}

impl From<PackageRow> for Package {
    fn from(row: PackageRow) -> Self {
        Package {
            id: row.id,
            title: row.title,
            description: row.description,
            image_url: row.image_url,
            price: row.price,
            duration: row.duration,
            category: row.category,
            sub_category: row.sub_category,
            destination: row.destination,
        }
    }
}

fn insert_package(package: &NewPackage) -> QueryAs<'static, Postgres, PackageRow, PgArguments> {
    sqlx::query_as(INSERT_PACKAGE)
        .bind(package.title.clone())
        .bind(package.description.clone())
        .bind(package.image_url.clone())
        .bind(package.price)
        .bind(package.duration)
        .bind(package.category.clone())
        .bind(package.sub_category.clone())
        .bind(package.destination.clone())
}

/// Compiles a package query to SQL.
///
/// Produces the same rows in the same order as `PackageQuery::apply` over an
/// id-ordered listing: ties on the sort key fall back to `id ASC`.
pub(crate) fn search_query(query: &PackageQuery) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new(format!("SELECT {PACKAGE_COLUMNS} FROM packages WHERE TRUE"));

    for predicate in &query.predicates {
        match predicate {
            Predicate::CategoryIs(category) => {
                qb.push(" AND category = ").push_bind(category.clone());
            }
            Predicate::SubCategoryIs(sub_category) => {
                qb.push(" AND sub_category = ").push_bind(sub_category.clone());
            }
            // strpos rather than LIKE so '%' and '_' in the needle stay literal
            Predicate::DestinationContains(needle) => {
                qb.push(" AND strpos(lower(destination), ")
                    .push_bind(needle.clone())
                    .push(") > 0");
            }
            Predicate::DestinationLacks(needle) => {
                qb.push(" AND strpos(lower(destination), ")
                    .push_bind(needle.clone())
                    .push(") = 0");
            }
            Predicate::PriceAtLeast(min) => {
                qb.push(" AND price >= ").push_bind(*min);
            }
            Predicate::PriceAtMost(max) => {
                qb.push(" AND price <= ").push_bind(*max);
            }
            Predicate::DurationAtLeast(min) => {
                qb.push(" AND duration >= ").push_bind(*min);
            }
            Predicate::DurationAtMost(max) => {
                qb.push(" AND duration <= ").push_bind(*max);
            }
        }
    }

    qb.push(" ORDER BY ");
    if let Some(sort) = query.sort {
        qb.push(sort.field().column())
            .push(" ")
            .push(sort.direction().keyword())
            .push(", ");
    }
    qb.push("id ASC");

    qb
}

#[async_trait]
impl PackageRepository for PostgresPackageRepository {
    async fn list_packages(&self) -> RepoResult<Vec<Package>> {
        let rows: Vec<PackageRow> = sqlx::query_as(&format!(
            "SELECT {PACKAGE_COLUMNS} FROM packages ORDER BY id ASC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Package::from).collect())
    }

    async fn find_packages(&self, query: &PackageQuery) -> RepoResult<Vec<Package>> {
        let mut qb = search_query(query);
        let rows: Vec<PackageRow> = qb.build_query_as().fetch_all(&self.pool).await?;

        Ok(rows.into_iter().map(Package::from).collect())
    }

    async fn get_package(&self, id: i32) -> RepoResult<Option<Package>> {
        let row: Option<PackageRow> = sqlx::query_as(&format!(
            "SELECT {PACKAGE_COLUMNS} FROM packages WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Package::from))
    }

    async fn create_package(&self, package: &NewPackage) -> RepoResult<Package> {
        let row = insert_package(package).fetch_one(&self.pool).await?;
        Ok(row.into())
    }

    async fn clear_packages(&self) -> RepoResult<u64> {
        let result = sqlx::query("DELETE FROM packages")
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn replace_packages(&self, catalog: &[NewPackage]) -> RepoResult<Vec<Package>> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM packages").execute(&mut *tx).await?;

        let mut created = Vec::with_capacity(catalog.len());
        for package in catalog {
            let row = insert_package(package).fetch_one(&mut *tx).await?;
            created.push(Package::from(row));
        }

        tx.commit().await?;
        Ok(created)
    }
}

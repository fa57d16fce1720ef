use sqlx::MySqlPool;

use crate::core::Result;
use crate::modules::clients::models::{Address, Client};

/// MySQL persistence for clients and their addresses
pub struct ClientRepository {
    pool: MySqlPool,
}

impl ClientRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Load a client together with its owned address
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Client>> {
        let client =
            sqlx::query_as::<_, Client>("SELECT id, name, cpf, phone FROM clients WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        let Some(mut client) = client else {
            return Ok(None);
        };

        client.address = self.find_address(&client.id).await?;
        Ok(Some(client))
    }

    pub async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Client>> {
        let clients = sqlx::query_as::<_, Client>(
            "SELECT id, name, cpf, phone FROM clients ORDER BY name LIMIT ? OFFSET ?",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(clients)
    }

    pub async fn search_by_name(&self, name: &str, limit: i64, offset: i64) -> Result<Vec<Client>> {
        let pattern = format!("%{}%", name.to_lowercase());
        let clients = sqlx::query_as::<_, Client>(
            "SELECT id, name, cpf, phone FROM clients WHERE LOWER(name) LIKE ? \
             ORDER BY name LIMIT ? OFFSET ?",
        )
        .bind(pattern)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(clients)
    }

    pub async fn exists_by_cpf(&self, cpf: &str) -> Result<bool> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM clients WHERE cpf = ?")
            .bind(cpf)
            .fetch_one(&self.pool)
            .await?;

        Ok(count > 0)
    }

    async fn find_address(&self, client_id: &str) -> Result<Option<Address>> {
        let address = sqlx::query_as::<_, Address>(
            "SELECT id, client_id, street, city, state, zip_code, complement \
             FROM addresses WHERE client_id = ?",
        )
        .bind(client_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(address)
    }

    /// Persist a client and its address together
    pub async fn insert(&self, client: &Client) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("INSERT INTO clients (id, name, cpf, phone) VALUES (?, ?, ?, ?)")
            .bind(&client.id)
            .bind(&client.name)
            .bind(&client.cpf)
            .bind(&client.phone)
            .execute(&mut *tx)
            .await?;

        if let Some(address) = &client.address {
            sqlx::query(
                "INSERT INTO addresses (id, client_id, street, city, state, zip_code, \
                 complement) VALUES (?, ?, ?, ?, ?, ?, ?)",
            )
            .bind(&address.id)
            .bind(&address.client_id)
            .bind(&address.street)
            .bind(&address.city)
            .bind(&address.state)
            .bind(&address.zip_code)
            .bind(&address.complement)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    pub async fn update(&self, client: &Client) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("UPDATE clients SET name = ?, cpf = ?, phone = ? WHERE id = ?")
            .bind(&client.name)
            .bind(&client.cpf)
            .bind(&client.phone)
            .bind(&client.id)
            .execute(&mut *tx)
            .await?;

        if let Some(address) = &client.address {
            sqlx::query(
                "UPDATE addresses SET street = ?, city = ?, state = ?, zip_code = ?, \
                 complement = ? WHERE id = ?",
            )
            .bind(&address.street)
            .bind(&address.city)
            .bind(&address.state)
            .bind(&address.zip_code)
            .bind(&address.complement)
            .bind(&address.id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    /// Delete a client; the address row cascades
    pub async fn delete(&self, id: &str) -> Result<()> {
        sqlx::query("DELETE FROM clients WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

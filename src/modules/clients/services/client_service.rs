use sqlx::MySqlPool;

use crate::core::{require, AppError, Result};
use crate::modules::clients::models::{Address, Client};
use crate::modules::clients::repositories::ClientRepository;

#[derive(Debug, Clone)]
pub struct CreateAddressInput {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub complement: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CreateClientInput {
    pub name: String,
    pub cpf: String,
    pub phone: Option<String>,
    pub address: CreateAddressInput,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateAddressInput {
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub complement: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateClientInput {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<UpdateAddressInput>,
}

/// Business logic for client records
pub struct ClientService {
    repository: ClientRepository,
}

impl ClientService {
    pub fn new(pool: MySqlPool) -> Self {
        Self {
            repository: ClientRepository::new(pool),
        }
    }

    pub async fn get_client(&self, id: &str) -> Result<Client> {
        require(self.repository.find_by_id(id).await?, "Client", &id)
    }

    pub async fn list_clients(&self, limit: i64, offset: i64) -> Result<Vec<Client>> {
        self.repository.list(limit, offset).await
    }

    pub async fn search_by_name(&self, name: &str, limit: i64, offset: i64) -> Result<Vec<Client>> {
        self.repository.search_by_name(name, limit, offset).await
    }

    pub async fn create_client(&self, input: CreateClientInput) -> Result<Client> {
        if self.repository.exists_by_cpf(&input.cpf).await? {
            return Err(AppError::business("This CPF already exists"));
        }

        let mut client = Client::new(input.name, input.cpf, input.phone);
        client.address = Some(Address::new(
            client.id.clone(),
            input.address.street,
            input.address.city,
            input.address.state,
            input.address.zip_code,
            input.address.complement,
        ));

        self.repository.insert(&client).await?;
        Ok(client)
    }

    pub async fn update_client(&self, id: &str, input: UpdateClientInput) -> Result<Client> {
        let mut client = self.get_client(id).await?;

        if let Some(name) = input.name {
            client.name = name;
        }
        if let Some(phone) = input.phone {
            client.phone = Some(phone);
        }
        if let (Some(update), Some(address)) = (input.address, client.address.as_mut()) {
            if let Some(street) = update.street {
                address.street = street;
            }
            if let Some(city) = update.city {
                address.city = city;
            }
            if let Some(state) = update.state {
                address.state = state;
            }
            if let Some(zip_code) = update.zip_code {
                address.zip_code = zip_code;
            }
            if let Some(complement) = update.complement {
                address.complement = Some(complement);
            }
        }

        self.repository.update(&client).await?;
        Ok(client)
    }

    pub async fn delete_client(&self, id: &str) -> Result<()> {
        self.get_client(id).await?;
        self.repository.delete(id).await
    }
}

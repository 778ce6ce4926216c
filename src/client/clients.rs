//! Client (customer) records and their authorized users.

// self
use crate::{
	client::{CallResult, FalconClient, common},
	http::{ApiHttpClient, HttpMethod},
	model::ClientRecord,
	obs::Resource,
};

/// Wildcard id understood by `GET /clients/?id=` as "every client".
pub const ALL_CLIENTS: &str = "*";

impl<C> FalconClient<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Lists every client under `payload["clients"]` via the search endpoint.
	pub async fn client_list(&mut self) -> CallResult {
		let call = self
			.call(Resource::Clients, "client_list", HttpMethod::Get, ["clients", ""])
			.query([("search_field", "client_id"), ("search_value", ALL_CLIENTS)])
			.expect(200, "Clients retrieved", "Unable to retrieve clients")
			.list_key("clients");

		self.send(call).await
	}

	/// Lists every client; shorthand for `get_client("*")`.
	pub async fn get_clients(&mut self) -> CallResult {
		self.get_client(ALL_CLIENTS).await
	}

	/// Fetches one client, or all of them with [`ALL_CLIENTS`].
	///
	/// A list answer is wrapped under `payload["clients"]`.
	pub async fn get_client(&mut self, client_id: &str) -> CallResult {
		let client_id = common::require("client_id", client_id)?;
		let call = self
			.call(Resource::Clients, "get_client", HttpMethod::Get, ["clients", ""])
			.query([("id", client_id)])
			.expect(200, "Client retrieved", "Client retrieval failed")
			.list_key("clients");

		self.send(call).await
	}

	/// Creates a client; 201 on success.
	pub async fn create_client(&mut self, client: &ClientRecord) -> CallResult {
		let call = self
			.call(Resource::Clients, "create_client", HttpMethod::Post, ["clients"])
			.json(client)?
			.expect(201, "Client created", "Client creation failed");

		self.send(call).await
	}

	/// Replaces a client record.
	pub async fn update_client(&mut self, client: &ClientRecord) -> CallResult {
		let call = self
			.call(Resource::Clients, "update_client", HttpMethod::Put, ["clients"])
			.json(client)?
			.expect(200, "Client updated", "Client update failed");

		self.send(call).await
	}

	/// Deletes a client.
	pub async fn delete_client(&mut self, client_id: &str) -> CallResult {
		let client_id = common::require_segment("client_id", client_id)?;
		let call = self
			.call(Resource::Clients, "delete_client", HttpMethod::Delete, ["clients", client_id])
			.expect(200, "Client deleted", "Client deletion failed");

		self.send(call).await
	}

	/// Grants `username` access to a client.
	pub async fn add_authorized_user(&mut self, client_id: &str, username: &str) -> CallResult {
		self.change_authorized_user(client_id, username, UserChange::Add).await
	}

	/// Revokes `username`'s access to a client.
	pub async fn remove_authorized_user(&mut self, client_id: &str, username: &str) -> CallResult {
		self.change_authorized_user(client_id, username, UserChange::Remove).await
	}

	async fn change_authorized_user(
		&mut self,
		client_id: &str,
		username: &str,
		change: UserChange,
	) -> CallResult {
		let client_id = common::require_segment("client_id", client_id)?;
		let username = common::require_segment("username", username)?;
		let (operation, segment, success, failure) = match change {
			UserChange::Add =>
				("add_authorized_user", "add_authorized_user", "User added", "Unable to add user"),
			UserChange::Remove => (
				"remove_authorized_user",
				"remove_authorized_user",
				"User removed",
				"Unable to remove user",
			),
		};
		let call = self
			.call(Resource::Clients, operation, HttpMethod::Put, [
				"clients", client_id, segment, username,
			])
			.json(&ClientRecord::new())?
			.expect(200, success, failure);

		self.send(call).await
	}
}

#[derive(Clone, Copy)]
enum UserChange {
	Add,
	Remove,
}

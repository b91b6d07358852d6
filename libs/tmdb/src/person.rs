use crate::{models::PersonDetails, TmdbClient};

impl TmdbClient {
    /// Get the details of a person with their combined movie/TV credits.
    pub async fn person_details(&self, person_id: i64) -> crate::Result<PersonDetails> {
        let url = self.url(&format!("/person/{}", person_id));
        let api_key = self.api_key()?.to_string();

        self.throttle().await;
        let response = self
            .client()
            .get(&url)
            .query(&[
                ("api_key", api_key.as_str()),
                ("language", self.lang.as_str()),
                ("append_to_response", "combined_credits,external_ids"),
            ])
            .send()
            .await?;

        self.handle_response(response).await
    }
}

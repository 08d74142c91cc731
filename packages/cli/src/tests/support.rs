use aws_sdk_quicksight::config::{BehaviorVersion, Credentials, Region};
use aws_sdk_quicksight::Client;

use sightline_api::ApiState;
use sightline_quicksight::{EmbedClient, QuickSightSettings};

/// Router state backed by a client with static test credentials. Requests
/// that pass validation would go to the network, so tests built on this
/// state only exercise paths that fail before the vendor call.
pub fn test_state() -> ApiState {
    let settings = QuickSightSettings {
        region: "us-east-1".to_string(),
        account_id: "123456789012".to_string(),
        namespace: "default".to_string(),
        default_user_arn: Some(
            "arn:aws:quicksight:us-east-1:123456789012:user/default/test".to_string(),
        ),
    };

    let config = aws_sdk_quicksight::Config::builder()
        .behavior_version(BehaviorVersion::latest())
        .region(Region::new("us-east-1"))
        .credentials_provider(Credentials::new("akid", "secret", None, None, "test"))
        .build();

    ApiState::new(EmbedClient::new(Client::from_conf(config), settings))
}

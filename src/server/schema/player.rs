//! Player schema: validation of update bodies and serialization of players.

use serde_json::{Map, Value};

use crate::{
    model::player::PlayerDto,
    server::{
        model::player::{Player, UpdatePlayerParams},
        schema::{FieldErrors, SCHEMA_KEY},
    },
};

const NICKNAME_MAX_LEN: usize = 32;

const INVALID_INPUT_TYPE: &str = "Invalid input type.";
const UNKNOWN_FIELD: &str = "Unknown field.";
const READ_ONLY_FIELD: &str = "Read-only field.";
const NOT_A_STRING: &str = "Not a valid string.";
const NOT_A_BOOLEAN: &str = "Not a valid boolean.";

/// Fields that appear in responses but can never be written by a client.
const READ_ONLY_FIELDS: &[&str] = &["slack_id", "name", "real_name", "avatar_url"];

/// Schema contract for the player resource.
///
/// `validate` must be called, and return no errors, before `load`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlayerSchema;

impl PlayerSchema {
    /// Validates a partial update body.
    ///
    /// # Arguments
    /// - `input` - Parsed JSON request body
    ///
    /// # Returns
    /// - `FieldErrors` - Messages per offending field; empty when the input is valid
    pub fn validate(&self, input: &Value) -> FieldErrors {
        let mut errors = FieldErrors::new();

        let Some(fields) = input.as_object() else {
            errors.insert(SCHEMA_KEY.to_string(), vec![INVALID_INPUT_TYPE.to_string()]);
            return errors;
        };

        for (key, value) in fields {
            let result = match key.as_str() {
                "nickname" => validate_nickname(value),
                "active" => validate_active(value),
                key if READ_ONLY_FIELDS.contains(&key) => Err(READ_ONLY_FIELD.to_string()),
                _ => Err(UNKNOWN_FIELD.to_string()),
            };

            if let Err(message) = result {
                errors.entry(key.clone()).or_default().push(message);
            }
        }

        errors
    }

    /// Loads a validated update body into update parameters.
    ///
    /// Only the keys present in `input` are set. Nicknames are trimmed.
    pub fn load(&self, input: &Value) -> UpdatePlayerParams {
        let empty = Map::new();
        let fields = input.as_object().unwrap_or(&empty);

        UpdatePlayerParams {
            nickname: fields
                .get("nickname")
                .map(|value| value.as_str().map(|s| s.trim().to_string())),
            active: fields.get("active").and_then(Value::as_bool),
        }
    }

    /// Serializes a player for a response.
    ///
    /// Profile fields are only included when the player was merged with a Slack user.
    pub fn dump(&self, player: Player) -> PlayerDto {
        let (name, real_name, avatar_url) = match player.profile {
            Some(profile) => (Some(profile.name), Some(profile.real_name), profile.avatar_url),
            None => (None, None, None),
        };

        PlayerDto {
            slack_id: player.slack_id,
            nickname: player.nickname,
            active: player.active,
            name,
            real_name,
            avatar_url,
        }
    }

    pub fn dump_many(&self, players: Vec<Player>) -> Vec<PlayerDto> {
        players.into_iter().map(|player| self.dump(player)).collect()
    }
}

fn validate_nickname(value: &Value) -> Result<(), String> {
    match value {
        Value::Null => Ok(()),
        Value::String(s) => {
            let len = s.trim().chars().count();
            if (1..=NICKNAME_MAX_LEN).contains(&len) {
                Ok(())
            } else {
                Err(format!("Length must be between 1 and {}.", NICKNAME_MAX_LEN))
            }
        }
        _ => Err(NOT_A_STRING.to_string()),
    }
}

fn validate_active(value: &Value) -> Result<(), String> {
    match value {
        Value::Bool(_) => Ok(()),
        _ => Err(NOT_A_BOOLEAN.to_string()),
    }
}

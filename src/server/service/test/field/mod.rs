use crate::server::{
    error::{validation::ValidationError, AppError},
    model::field::{CreateFieldParams, UpdateFieldParams},
    service::field::FieldService,
};
use test_utils::{builder::TestBuilder, factory};


fn params(hourly_rate: f64) -> CreateFieldParams {
    CreateFieldParams {
        id: "f1".to_string(),
        group_id: "g1".to_string(),
        name: "Arena Vila".to_string(),
        location: "Rua das Flores, 100".to_string(),
        contact_name: None,
        contact_phone: None,
        hourly_rate,
        coordinates: None,
    }
}

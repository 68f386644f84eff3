//! Group factory for creating test group entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::id_list::IdList;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test groups with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let group = GroupFactory::new(&db)
///     .admin_id("user_1")
///     .members(vec!["user_2".to_string()])
///     .build()
///     .await?;
/// ```
pub struct GroupFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    admin_id: String,
    admins: Vec<String>,
    name: String,
    members: Vec<String>,
    pending_requests: Vec<String>,
}

impl<'a> GroupFactory<'a> {
    /// Creates a new GroupFactory with default values.
    ///
    /// Defaults:
    /// - id: `"group_{id}"`
    /// - admin_id: `"user_{id}"`, also the only admin and member
    /// - name: `"Group {id}"`
    /// - pending_requests: empty
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let admin_id = format!("user_{}", id);
        Self {
            db,
            id: format!("group_{}", id),
            admins: vec![admin_id.clone()],
            members: vec![admin_id.clone()],
            admin_id,
            name: format!("Group {}", id),
            pending_requests: Vec::new(),
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn admin_id(mut self, admin_id: impl Into<String>) -> Self {
        self.admin_id = admin_id.into();
        self
    }

    pub fn admins(mut self, admins: Vec<String>) -> Self {
        self.admins = admins;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn members(mut self, members: Vec<String>) -> Self {
        self.members = members;
        self
    }

    pub fn pending_requests(mut self, pending_requests: Vec<String>) -> Self {
        self.pending_requests = pending_requests;
        self
    }

    /// Builds and inserts the group entity into the database.
    ///
    /// Lists are stored exactly as given; no invariant pass is applied.
    pub async fn build(self) -> Result<entity::group::Model, DbErr> {
        entity::group::ActiveModel {
            id: ActiveValue::Set(self.id),
            admin_id: ActiveValue::Set(self.admin_id),
            admins: ActiveValue::Set(IdList(self.admins)),
            name: ActiveValue::Set(self.name),
            sport: ActiveValue::Set("Futebol".to_string()),
            invite_code: ActiveValue::Set(format!("INV{}", next_id())),
            created_at: ActiveValue::Set(Utc::now().to_rfc3339()),
            members: ActiveValue::Set(IdList(self.members)),
            pending_requests: ActiveValue::Set(IdList(self.pending_requests)),
            logo: ActiveValue::Set(None),
            payment_mode: ActiveValue::Set("fixed".to_string()),
            fixed_amount: ActiveValue::Set(0.0),
            monthly_fee: ActiveValue::Set(0.0),
            city: ActiveValue::Set(String::new()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a group with default values.
///
/// Shorthand for `GroupFactory::new(db).build().await`.
pub async fn create_group(db: &DatabaseConnection) -> Result<entity::group::Model, DbErr> {
    GroupFactory::new(db).build().await
}

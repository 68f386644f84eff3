//! Group domain model, membership actions and parameters.
//!
//! A group keeps three ordered rosters (admins, members, pending join requests). Every
//! write goes through [`Group::enforce_invariants`] so the stored rosters are always
//! consistent regardless of what the client sent.

use crate::{
    model::group::{CreateGroupDto, GroupDto, UpdateGroupDto},
    server::{
        model::id_set::IdSet,
        util::id::{generate_invite_code, id_or_generate},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub id: String,
    /// Owner of the group; always present in `admins` and cannot be demoted.
    pub admin_id: String,
    pub admins: IdSet,
    pub name: String,
    pub sport: String,
    pub invite_code: String,
    pub created_at: String,
    pub members: IdSet,
    pub pending_requests: IdSet,
    pub logo: Option<String>,
    pub payment_mode: String,
    pub fixed_amount: f64,
    pub monthly_fee: f64,
    pub city: String,
}

/// Membership change requested through the group action endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MembershipAction {
    RequestJoin,
    ApproveRequest,
    RejectRequest,
    CancelRequest,
    RemoveMember,
    PromoteMember,
    DemoteMember,
}

impl MembershipAction {
    /// Parses the action segment of `/api/groups/{id}/{action}`.
    pub fn from_path(action: &str) -> Option<Self> {
        match action {
            "request_join" => Some(Self::RequestJoin),
            "approve_request" => Some(Self::ApproveRequest),
            "reject_request" => Some(Self::RejectRequest),
            "cancel_request" => Some(Self::CancelRequest),
            "remove_member" => Some(Self::RemoveMember),
            "promote_member" => Some(Self::PromoteMember),
            "demote_member" => Some(Self::DemoteMember),
            _ => None,
        }
    }
}

/// Result of applying a [`MembershipAction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MembershipOutcome {
    Applied,
    /// The action was refused without error, e.g. demoting the owner.
    Ignored,
}

impl MembershipOutcome {
    pub fn as_status(self) -> &'static str {
        match self {
            Self::Applied => "ok",
            Self::Ignored => "ignored",
        }
    }
}

impl Group {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// Stored rosters are read through `IdSet`, which drops duplicate ids.
    pub fn from_entity(entity: entity::group::Model) -> Self {
        Self {
            id: entity.id,
            admin_id: entity.admin_id,
            admins: entity.admins.into(),
            name: entity.name,
            sport: entity.sport,
            invite_code: entity.invite_code,
            created_at: entity.created_at,
            members: entity.members.into(),
            pending_requests: entity.pending_requests.into(),
            logo: entity.logo,
            payment_mode: entity.payment_mode,
            fixed_amount: entity.fixed_amount,
            monthly_fee: entity.monthly_fee,
            city: entity.city,
        }
    }

    /// Converts an entity model and enforces invariants, reporting whether the
    /// stored row differs from the result.
    ///
    /// Catches duplicated roster entries as well, which `from_entity` drops silently.
    pub fn from_entity_aligned(entity: entity::group::Model) -> (Self, bool) {
        let stored_len =
            entity.admins.0.len() + entity.members.0.len() + entity.pending_requests.0.len();

        let mut group = Self::from_entity(entity);
        let deduplicated =
            group.admins.len() + group.members.len() + group.pending_requests.len() != stored_len;
        let changed = group.enforce_invariants();

        (group, deduplicated || changed)
    }

    pub fn into_dto(self) -> GroupDto {
        GroupDto {
            id: self.id,
            admin_id: self.admin_id,
            admins: self.admins.into_vec(),
            name: self.name,
            sport: self.sport,
            invite_code: self.invite_code,
            created_at: self.created_at,
            members: self.members.into_vec(),
            pending_requests: self.pending_requests.into_vec(),
            logo: self.logo,
            payment_mode: self.payment_mode,
            fixed_amount: self.fixed_amount,
            monthly_fee: self.monthly_fee,
            city: self.city,
        }
    }

    /// Restores roster consistency.
    ///
    /// - the owner is listed among the admins
    /// - nobody is both a member and a pending requester
    ///
    /// Duplicates are already impossible inside an `IdSet`.
    ///
    /// # Returns
    /// - `true` - Something was changed
    /// - `false` - The group was already consistent
    pub fn enforce_invariants(&mut self) -> bool {
        let mut changed = false;

        if !self.admin_id.is_empty() && self.admins.insert(self.admin_id.clone()) {
            changed = true;
        }

        let members = &self.members;
        let before = self.pending_requests.len();
        self.pending_requests.retain(|id| !members.contains(id));
        if self.pending_requests.len() != before {
            changed = true;
        }

        changed
    }

    /// Whether the user owns the group or is one of its members.
    pub fn includes_user(&self, user_id: &str) -> bool {
        self.admin_id == user_id || self.members.contains(user_id)
    }

    /// Applies a membership action for `user_id` and re-enforces invariants.
    pub fn apply_membership(
        &mut self,
        action: MembershipAction,
        user_id: &str,
    ) -> MembershipOutcome {
        match action {
            MembershipAction::RequestJoin => {
                if !self.members.contains(user_id) {
                    self.pending_requests.insert(user_id);
                }
            }
            MembershipAction::ApproveRequest => {
                self.pending_requests.remove(user_id);
                self.members.insert(user_id);
            }
            MembershipAction::RejectRequest | MembershipAction::CancelRequest => {
                self.pending_requests.remove(user_id);
            }
            MembershipAction::RemoveMember => {
                self.members.remove(user_id);
                self.admins.remove(user_id);
            }
            MembershipAction::PromoteMember => {
                self.admins.insert(user_id);
            }
            MembershipAction::DemoteMember => {
                if user_id == self.admin_id {
                    return MembershipOutcome::Ignored;
                }
                self.admins.remove(user_id);
            }
        }

        self.enforce_invariants();
        MembershipOutcome::Applied
    }
}

/// Full group payload for create and replace.
#[derive(Debug, Clone)]
pub struct CreateGroupParams {
    pub id: String,
    pub admin_id: String,
    pub admins: IdSet,
    pub name: String,
    pub sport: String,
    pub invite_code: String,
    pub created_at: String,
    pub members: IdSet,
    pub pending_requests: IdSet,
    pub logo: Option<String>,
    pub payment_mode: String,
    pub fixed_amount: f64,
    pub monthly_fee: f64,
    pub city: String,
}

impl CreateGroupParams {
    /// Converts the request body, filling in a generated id, invite code and
    /// creation timestamp when the client omitted them.
    pub fn from_dto(dto: CreateGroupDto) -> Self {
        let invite_code = if dto.invite_code.trim().is_empty() {
            generate_invite_code()
        } else {
            dto.invite_code
        };

        Self {
            id: id_or_generate(dto.id),
            admin_id: dto.admin_id,
            admins: dto.admins.into(),
            name: dto.name,
            sport: dto.sport,
            invite_code,
            created_at: dto
                .created_at
                .unwrap_or_else(|| chrono::Utc::now().to_rfc3339()),
            members: dto.members.into(),
            pending_requests: dto.pending_requests.into(),
            logo: dto.logo,
            payment_mode: dto.payment_mode,
            fixed_amount: dto.fixed_amount,
            monthly_fee: dto.monthly_fee,
            city: dto.city,
        }
    }

    /// Replaces the generated or client-sent id with the one from the request path.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Builds the domain group with invariants applied.
    pub fn into_group(self) -> Group {
        let mut group = Group {
            id: self.id,
            admin_id: self.admin_id,
            admins: self.admins,
            name: self.name,
            sport: self.sport,
            invite_code: self.invite_code,
            created_at: self.created_at,
            members: self.members,
            pending_requests: self.pending_requests,
            logo: self.logo,
            payment_mode: self.payment_mode,
            fixed_amount: self.fixed_amount,
            monthly_fee: self.monthly_fee,
            city: self.city,
        };
        group.enforce_invariants();
        group
    }
}

/// Partial group update; `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateGroupParams {
    pub admin_id: Option<String>,
    pub admins: Option<IdSet>,
    pub name: Option<String>,
    pub sport: Option<String>,
    pub invite_code: Option<String>,
    pub members: Option<IdSet>,
    pub pending_requests: Option<IdSet>,
    pub logo: Option<Option<String>>,
    pub payment_mode: Option<String>,
    pub fixed_amount: Option<f64>,
    pub monthly_fee: Option<f64>,
    pub city: Option<String>,
}

impl UpdateGroupParams {
    pub fn from_dto(dto: UpdateGroupDto) -> Self {
        Self {
            admin_id: dto.admin_id,
            admins: dto.admins.map(IdSet::from),
            name: dto.name,
            sport: dto.sport,
            invite_code: dto.invite_code,
            members: dto.members.map(IdSet::from),
            pending_requests: dto.pending_requests.map(IdSet::from),
            logo: dto.logo,
            payment_mode: dto.payment_mode,
            fixed_amount: dto.fixed_amount,
            monthly_fee: dto.monthly_fee,
            city: dto.city,
        }
    }

    /// Applies the provided fields to `group` and re-enforces invariants.
    pub fn apply_to(self, group: &mut Group) {
        if let Some(admin_id) = self.admin_id {
            group.admin_id = admin_id;
        }
        if let Some(admins) = self.admins {
            group.admins = admins;
        }
        if let Some(name) = self.name {
            group.name = name;
        }
        if let Some(sport) = self.sport {
            group.sport = sport;
        }
        if let Some(invite_code) = self.invite_code {
            group.invite_code = invite_code;
        }
        if let Some(members) = self.members {
            group.members = members;
        }
        if let Some(pending_requests) = self.pending_requests {
            group.pending_requests = pending_requests;
        }
        if let Some(logo) = self.logo {
            group.logo = logo;
        }
        if let Some(payment_mode) = self.payment_mode {
            group.payment_mode = payment_mode;
        }
        if let Some(fixed_amount) = self.fixed_amount {
            group.fixed_amount = fixed_amount;
        }
        if let Some(monthly_fee) = self.monthly_fee {
            group.monthly_fee = monthly_fee;
        }
        if let Some(city) = self.city {
            group.city = city;
        }

        group.enforce_invariants();
    }
}

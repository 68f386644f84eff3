use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{comment, field, football_match, group, health, player, transaction},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Futgol API",
        description = "Groups, players, fields, matches and the group ledger of a pickup football app"
    ),
    tags(
        (name = "health", description = "Liveness"),
        (name = "group", description = "Groups and membership"),
        (name = "player", description = "Players"),
        (name = "field", description = "Rented fields"),
        (name = "match", description = "Matches and settlement"),
        (name = "transaction", description = "Group ledger"),
        (name = "comment", description = "Match comments")
    )
)]
pub struct ApiDoc;

/// Builds every `/api` route plus the Swagger UI at `/api/docs`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(health::health))
        .routes(routes!(group::get_groups, group::create_group))
        .routes(routes!(group::get_groups_by_user))
        .routes(routes!(
            group::get_group,
            group::put_group,
            group::update_group,
            group::delete_group
        ))
        .routes(routes!(group::apply_membership))
        .routes(routes!(player::get_players, player::create_player))
        .routes(routes!(player::update_players_by_user))
        .routes(routes!(
            player::get_player,
            player::put_player,
            player::update_player,
            player::delete_player
        ))
        .routes(routes!(field::get_fields, field::create_field))
        .routes(routes!(
            field::get_field,
            field::put_field,
            field::update_field,
            field::delete_field
        ))
        .routes(routes!(
            football_match::get_matches,
            football_match::create_match
        ))
        .routes(routes!(
            football_match::get_match,
            football_match::put_match,
            football_match::update_match,
            football_match::delete_match
        ))
        .routes(routes!(football_match::finalize_match))
        .routes(routes!(football_match::reopen_match))
        .routes(routes!(
            transaction::get_transactions,
            transaction::create_transaction
        ))
        .routes(routes!(transaction::upsert_match_revenue))
        .routes(routes!(
            transaction::get_transaction,
            transaction::put_transaction,
            transaction::update_transaction,
            transaction::delete_transaction
        ))
        .routes(routes!(comment::get_comments, comment::create_comment))
        .routes(routes!(
            comment::get_comment,
            comment::put_comment,
            comment::update_comment,
            comment::delete_comment
        ))
        .split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}

use actix_web::web;

pub mod achievements;
pub mod admin;
pub mod auth;
pub mod backend_health;
pub mod catalog;
pub mod matches;
pub mod posts;
pub mod predictions;
pub mod users;

use crate::middleware::{AdminMiddleware, AuthMiddleware};

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(backend_health::backend_health);

    cfg.service(
        web::scope("/api")
            // Registration order matters where prefixes overlap: specific
            // resources and scopes come before the catch-all ones.
            .service(
                web::scope("/auth")
                    .service(auth::register)
                    .service(auth::login)
                    .service(auth::refresh),
            )
            .service(
                web::scope("/users/me")
                    .wrap(AuthMiddleware)
                    .service(users::me)
                    .service(users::update_profile),
            )
            .service(users::leaderboard)
            .service(users::get_user_achievements)
            .service(users::get_user)
            .service(matches::list_matches)
            .service(matches::get_match)
            .service(
                web::scope("/predictions/match").service(predictions::match_predictions),
            )
            .service(
                web::scope("/predictions/calculate")
                    .wrap(AdminMiddleware)
                    .service(predictions::calculate_points),
            )
            .service(
                web::scope("/predictions")
                    .wrap(AuthMiddleware)
                    .service(predictions::my_predictions)
                    .service(predictions::upcoming_predictions)
                    .service(predictions::check_prediction)
                    .service(predictions::create_prediction)
                    .service(predictions::update_prediction)
                    .service(predictions::delete_prediction),
            )
            .service(achievements::list_achievements)
            .service(
                web::scope("/achievements")
                    .wrap(AuthMiddleware)
                    .service(achievements::check_achievements),
            )
            .service(posts::get_feed)
            .service(posts::get_comments)
            .service(
                web::scope("/social")
                    .wrap(AuthMiddleware)
                    .service(posts::create_post)
                    .service(posts::update_post)
                    .service(posts::delete_post)
                    .service(posts::create_comment)
                    .service(posts::update_comment)
                    .service(posts::delete_comment)
                    .service(posts::like_post)
                    .service(posts::unlike_post),
            )
            .service(catalog::list_leagues)
            .service(catalog::list_seasons)
            .service(catalog::get_standings)
            .service(catalog::get_season)
            .service(catalog::list_teams)
            .service(catalog::get_team_roster)
            .service(catalog::get_team)
            .service(catalog::list_players)
            .service(catalog::get_player)
            .service(catalog::list_stadiums)
            .service(catalog::list_referees)
            .service(catalog::list_transfers)
            .service(
                web::scope("/admin")
                    .wrap(AdminMiddleware)
                    .service(admin::create_match)
                    .service(admin::record_result)
                    .service(admin::set_status)
                    .service(admin::add_event)
                    .service(admin::add_lineup_entry)
                    .service(admin::assign_referee)
                    .service(admin::create_league)
                    .service(admin::create_season)
                    .service(admin::create_team)
                    .service(admin::create_player)
                    .service(admin::create_stadium)
                    .service(admin::create_referee)
                    .service(admin::add_roster_entry)
                    .service(admin::create_transfer)
                    .service(admin::upsert_standing)
                    .service(admin::create_achievement)
                    .service(admin::delete_achievement),
            ),
    );
}

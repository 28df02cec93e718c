use league_core::league::{
    EloRatingEngine, HeadToHead, LeagueHistory, LeagueSettings, M_TEAMS, MatchFilter, MatchKind, MatchValidator,
    NewMatch, PointsProgression, PowerRanking, RatingSettings, ScheduleGenerator, Scope, SeasonMatches, SeasonMatrix,
    SeasonSummary, Standings, StandingsAggregator, StandingsTotals, V_TEAMS,
};
use league_core::utils::TimeEstimation;
use database::{DatabaseLoader, LeagueSnapshot};
use env_logger::Env;
use log::{info, warn};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

#[cfg(target_os = "linux")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let settings = read_settings();

    if env::var("MODE") == Ok(String::from("SCHEDULE")) {
        print_schedule(settings.schedule_rounds);
        return Ok(());
    }

    let (snapshot, estimated) = TimeEstimation::estimate(load_snapshot);
    let snapshot = snapshot?;

    info!("league data loaded: {} ms", estimated);

    let seasons = snapshot.by_season();

    for season in &seasons {
        report_season(season, &settings.rating);
    }

    report_history(&seasons);

    Ok(())
}

fn load_snapshot() -> Result<LeagueSnapshot, database::LoaderError> {
    match env::var("LEAGUE_DATA") {
        Ok(path) if !path.is_empty() => DatabaseLoader::load_path(&PathBuf::from(path)),
        _ => DatabaseLoader::load_bundled(),
    }
}

fn read_settings() -> LeagueSettings {
    let defaults = LeagueSettings::default();

    LeagueSettings {
        rating: RatingSettings::new(
            env_override("ELO_BASE", defaults.rating.base_rating),
            env_override("ELO_K", defaults.rating.k_factor),
        ),
        schedule_rounds: env_override("SCHEDULE_ROUNDS", defaults.schedule_rounds),
    }
}

fn env_override<T: FromStr + Copy + std::fmt::Display>(name: &str, default: T) -> T {
    match env::var(name) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("{}={} is not valid, using {}", name, raw, default);
            default
        }),
        Err(_) => default,
    }
}

fn print_schedule(rounds: u32) {
    let schedule = ScheduleGenerator::generate(rounds);

    info!("schedule: {} rounds, {} fixtures", schedule.rounds.len(), schedule.len());

    for round in &schedule.rounds {
        let line: Vec<String> = round
            .fixtures
            .iter()
            .map(|f| format!("{} - {}", f.home_team, f.away_team))
            .collect();

        info!("round {:>2}: {}", round.round, line.join(" | "));
    }
}

fn report_season(season: &SeasonMatches, rating: &RatingSettings) {
    let matches = &season.matches;

    info!("=== season {} ({} rows) ===", season.season.label, matches.len());

    audit(season);

    for scope in [Scope::M, Scope::V] {
        log_standings(&format!("standings {:?}", scope), &StandingsAggregator::compute(matches, scope, false));
    }

    let all = StandingsAggregator::compute(matches, Scope::All, true);
    log_standings("standings ALL", &all);

    if let Standings::Detailed(rows) = &all {
        for row in rows {
            info!(
                "{} PTS% {:.1} OT% {:.1} 1G {}-{} last5 [{}] streak {}",
                row.team,
                row.extended.points_pct,
                row.extended.overtime_pct,
                row.extended.one_goal_wins,
                row.extended.one_goal_losses,
                row.last5,
                row.streak
            );
        }
    }

    if let StandingsTotals::Detailed(rows) = StandingsAggregator::totals(matches, true) {
        for row in rows {
            info!(
                "{:<9} GP {:>3} PTS {:>3} GF {:>4} GA {:>4} OT% {:.1}",
                row.label, row.stats.played, row.stats.points, row.stats.goals_for, row.stats.goals_against,
                row.extended.overtime_pct
            );
        }
    }

    for row in EloRatingEngine::compute(matches, rating) {
        info!("elo {} {:.1} ({} games)", row.team, row.rating, row.games);
    }

    for (position, row) in PowerRanking::compute(matches, Scope::All, rating).iter().enumerate() {
        info!("power {:>2}. {} {:.1} PTS {}", position + 1, row.team, row.rating, row.stats.points);
    }

    if let Some(records) = SeasonSummary::records(matches) {
        info!("biggest win: {}", records.biggest_win);
        info!("most goals: {}", records.most_goals);
        info!(
            "most goals by a team: {} {} ({})",
            records.most_goals_by_team.team, records.most_goals_by_team.goals, records.most_goals_by_team.fixture
        );
    }

    if let Some(overview) = SeasonSummary::overview(matches) {
        info!(
            "played {}, OT {} ({:.1}%), one-goal {} ({:.1}%), blowouts {} ({:.1}%), 10+ {} ({:.1}%)",
            overview.played,
            overview.overtime.count,
            overview.overtime.pct,
            overview.one_goal.count,
            overview.one_goal.pct,
            overview.blowouts.count,
            overview.blowouts.pct,
            overview.ten_plus.count,
            overview.ten_plus.pct
        );

        if let (Some(best_m), Some(best_v)) = (&overview.best_m, &overview.best_v) {
            info!("best M {} ({} PTS), best V {} ({} PTS)", best_m.team, best_m.points, best_v.team, best_v.points);

            let duel = HeadToHead::between(matches, &best_m.team, &best_v.team);
            info!(
                "{} vs {}: {}-{}-{}-{} goals {}:{}",
                duel.team,
                duel.opponent,
                duel.summary.wins,
                duel.summary.overtime_wins,
                duel.summary.overtime_losses,
                duel.summary.losses,
                duel.summary.goals_for,
                duel.summary.goals_against
            );

            for row in PointsProgression::for_team(matches, &best_m.team) {
                info!(
                    "{} round {:>2} vs {} {}:{} {} PTS {} ({:.3})",
                    best_m.team,
                    row.round,
                    row.opponent,
                    row.goals_for,
                    row.goals_against,
                    row.result,
                    row.points_total,
                    row.points_per_game
                );
            }

            for series in PointsProgression::compare(matches, &[best_m.team.as_str(), best_v.team.as_str()]) {
                if let Some(last) = series.points.last() {
                    info!("{} after round {}: {} PTS", series.team, last.round, last.points_total);
                }
            }

            for game in MatchFilter::team_matches(matches, &best_v.team).iter().filter(|g| !g.info.is_empty()) {
                info!("{} [{}]", game.game.fixture(), game.info);
            }
        }
    }

    let close_games = MatchFilter::new()
        .with_kind(MatchKind::Overtime)
        .with_kind(MatchKind::OneGoal)
        .apply(matches);
    info!("close games (OT or one goal): {}", close_games.len());

    let matrix = SeasonMatrix::build(matches);
    info!("matrix     {}", V_TEAMS.join("   "));
    for (team, row) in M_TEAMS.iter().zip(matrix.points_grid()) {
        let cells: Vec<String> = row.iter().map(|c| format!("{:>5}", c)).collect();
        info!("matrix {} {}", team, cells.join(" "));
    }
}

fn audit(season: &SeasonMatches) {
    for stored in season.matches.iter().filter(|m| !m.is_placeholder()) {
        if let Err(rejection) = MatchValidator::validate_update(stored.id, &NewMatch::from(stored), &season.matches) {
            warn!("stored match {} would be rejected: {}", stored.id, rejection);
        }
    }
}

fn log_standings(title: &str, standings: &Standings) {
    info!("{} ({} teams)", title, standings.len());

    for (position, (team, side, stats)) in standings.entries().into_iter().enumerate() {
        info!(
            "{:>2}. {} [{}] GP {:>2} W {:>2} W-OT {:>2} L-OT {:>2} L {:>2} GF {:>3} GA {:>3} GD {:>4} PTS {:>3} P/GP {:.3}",
            position + 1,
            team,
            side,
            stats.played,
            stats.wins,
            stats.overtime_wins,
            stats.overtime_losses,
            stats.losses,
            stats.goals_for,
            stats.goals_against,
            stats.goal_difference,
            stats.points,
            stats.points_per_game
        );
    }
}

fn report_history(seasons: &[SeasonMatches]) {
    let table = LeagueHistory::all_time_table(seasons);

    info!("=== all-time table ({} seasons) ===", seasons.len());

    for (position, row) in table.iter().enumerate() {
        info!(
            "{:>2}. {} [{}] GP {:>3} PTS {:>4} P/GP {:.3} GD {:>4}",
            position + 1,
            row.team,
            row.side,
            row.played,
            row.points,
            row.points_per_game,
            row.goal_difference
        );
    }

    if let Some(leader) = table.first() {
        for row in LeagueHistory::team_history(seasons, &leader.team) {
            info!("{} {}: GP {} PTS {} P/GP {:.3}", leader.team, row.season, row.played, row.points, row.points_per_game);
        }
    }
}

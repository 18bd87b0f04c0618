use anyhow::Result;
use httpmock::prelude::*;
use tictactoe_report::domain::model::{Standing, Standings};
use tictactoe_report::{HttpTournamentClient, ReportConfig, ReportError, Reporter, TournamentAggregator};

fn config_for(server: &MockServer, max_game_id: u32) -> ReportConfig {
    ReportConfig {
        base_url: server.base_url(),
        max_game_id,
        progress_interval: 1,
        timeout_seconds: 5,
    }
}

fn mock_roster<'a>(server: &'a MockServer, body: &str) -> httpmock::Mock<'a> {
    server.mock(|when, then| {
        when.method(GET).path("/jugadors");
        then.status(200).body(body);
    })
}

fn mock_board<'a>(server: &'a MockServer, game_id: u32, body: &str) -> httpmock::Mock<'a> {
    let path = format!("/partida/{}", game_id);
    server.mock(|when, then| {
        when.method(GET).path(path);
        then.status(200).body(body);
    })
}

#[tokio::test]
async fn test_end_to_end_fixed_labels_do_not_match_real_names() -> Result<()> {
    let server = MockServer::start();
    let roster = mock_roster(
        &server,
        "participant \"Ana\" \"PE\"\nparticipant \"Luis\" \"CO\"\ndesqualificada \"Luis\"\n",
    );
    let board1 = mock_board(&server, 1, "000\n1.1\n.1.");
    let board2 = mock_board(&server, 2, "...\n...\n...");

    let config = config_for(&server, 2);
    let aggregator = TournamentAggregator::new(HttpTournamentClient::new(&config)?, &config);
    let report = aggregator.run().await?;

    roster.assert();
    board1.assert();
    board2.assert();

    assert_eq!(report.participants.len(), 2);
    assert!(report.participants[1].disqualified);
    assert_eq!(report.tally.len(), 1);
    assert_eq!(report.tally.wins("Ana"), Some(0));
    assert!(!report.tally.contains("jugador1"));
    assert_eq!(report.standings, Standings::NoWinner);
    Ok(())
}

#[tokio::test]
async fn test_tie_between_labelled_participants() -> Result<()> {
    let server = MockServer::start();
    mock_roster(
        &server,
        r#"participant "jugador1" "AR" participant "jugador2" "UY" participant "Eve" "CL""#,
    );
    mock_board(&server, 1, "000\n1.1\n.1.");
    mock_board(&server, 2, "X.0\nX0.\nX..");
    mock_board(&server, 3, "010\n101\n101");

    let config = config_for(&server, 3);
    let seen = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
    let seen_by_hook = std::sync::Arc::clone(&seen);
    let aggregator = TournamentAggregator::new(HttpTournamentClient::new(&config)?, &config)
        .with_progress(move |n| seen_by_hook.lock().unwrap().push(n));

    let report = aggregator.run().await?;

    assert_eq!(*seen.lock().unwrap(), vec![1, 2, 3]);
    assert_eq!(report.tally.wins("Eve"), Some(0));
    assert_eq!(
        report.standings,
        Standings::Tie {
            wins: 1,
            winners: vec![
                Standing {
                    name: "jugador1".to_string(),
                    country: Some("AR".to_string()),
                    wins: 1,
                },
                Standing {
                    name: "jugador2".to_string(),
                    country: Some("UY".to_string()),
                    wins: 1,
                },
            ],
        }
    );

    let mut reporter = Reporter::new(Vec::new());
    reporter.participants(&report.participants)?;
    reporter.results(&report.standings)?;
    let output = String::from_utf8(reporter.into_inner())?;
    assert!(output.contains("Eve (CL) - Active"));
    assert!(output.contains("TIE between 2 players with 1 wins each:"));
    assert!(output.contains("- jugador2 (UY)"));
    Ok(())
}

#[tokio::test]
async fn test_failed_game_fetch_aborts_run() -> Result<()> {
    let server = MockServer::start();
    mock_roster(&server, r#"participant "jugador1" "AR""#);
    mock_board(&server, 1, "000\n...\n...");
    let failing = server.mock(|when, then| {
        when.method(GET).path("/partida/2");
        then.status(500);
    });
    let never_reached = mock_board(&server, 3, "000\n...\n...");

    let config = config_for(&server, 3);
    let aggregator = TournamentAggregator::new(HttpTournamentClient::new(&config)?, &config);
    let result = aggregator.run().await;

    failing.assert();
    never_reached.assert_hits(0);
    match result {
        Err(ReportError::HttpStatus { status, url }) => {
            assert_eq!(status, 500);
            assert!(url.ends_with("/partida/2"));
        }
        other => panic!("expected HttpStatus error, got {:?}", other.map(|r| r.standings)),
    }
    Ok(())
}

#[tokio::test]
async fn test_unreachable_server_is_reported_as_connection_error() -> Result<()> {
    let config = ReportConfig {
        base_url: "http://127.0.0.1:1".to_string(),
        max_game_id: 1,
        progress_interval: 1,
        timeout_seconds: 5,
    };
    let aggregator = TournamentAggregator::new(HttpTournamentClient::new(&config)?, &config);

    let err = aggregator.run().await.unwrap_err();

    assert!(err.is_unreachable());
    assert!(err
        .user_friendly_message(&config.base_url)
        .starts_with("Cannot reach the tournament server at http://127.0.0.1:1"));
    Ok(())
}

#[tokio::test]
async fn test_empty_roster_reports_no_winners() -> Result<()> {
    let server = MockServer::start();
    mock_roster(&server, "");
    mock_board(&server, 1, "000\n...\n...");

    let config = config_for(&server, 1);
    let aggregator = TournamentAggregator::new(HttpTournamentClient::new(&config)?, &config);
    let report = aggregator.run().await?;

    assert!(report.participants.is_empty());
    assert!(report.tally.is_empty());
    assert_eq!(report.standings, Standings::NoWinner);
    Ok(())
}

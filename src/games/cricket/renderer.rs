/// Hand cricket renderer - draws snapshots only, never touches game state
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::core::game::Presenter;
use crate::games::cricket::state::{Outcome, Phase, Snapshot};

#[derive(Debug, Clone, Copy, Default)]
pub struct Scoreboard;

impl Scoreboard {
    fn status_bar(snapshot: &Snapshot) -> Paragraph<'static> {
        let status = if snapshot.is_player_batting { "Batting" } else { "Bowling" };
        Paragraph::new(format!(" Status: {status}"))
            .style(Style::default().fg(Color::White).bg(Color::Black).add_modifier(Modifier::BOLD))
    }

    fn board(snapshot: &Snapshot) -> Paragraph<'static> {
        let player = Style::default().fg(Color::Blue);
        let computer = Style::default().fg(Color::Red);
        let lines = vec![
            Line::from(Span::styled(format!("Player: {}", snapshot.current_player_number), player)),
            Line::from(Span::styled(format!("Computer: {}", snapshot.last_opponent_number), computer)),
            Line::from(""),
            Line::from(Span::styled(format!("Player Score: {}", snapshot.player_score), player)),
            Line::from(Span::styled(format!("Computer Score: {}", snapshot.computer_score), computer)),
        ];
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" SCOREBOARD "))
    }

    fn banner(phase: Phase) -> Option<Paragraph<'static>> {
        let (text, color) = match phase {
            Phase::Ready => return None,
            Phase::Dismissed => ("OUT!", Color::Red),
            Phase::GameOver => ("GAME OVER!", Color::Green),
        };
        Some(
            Paragraph::new(text)
                .alignment(Alignment::Center)
                .style(Style::default().fg(color).add_modifier(Modifier::BOLD)),
        )
    }

    fn verdict(outcome: Option<Outcome>) -> (&'static str, &'static str, Color) {
        match outcome {
            Some(Outcome::PlayerWin) => ("*** PLAYER WINS! ***", "<<< WINNER >>>", Color::Green),
            Some(Outcome::ComputerWin) => ("Computer Wins!", "GAME OVER", Color::Red),
            Some(Outcome::Tie) => ("IT'S A TIE!", "= = =", Color::Yellow),
            None => ("Game abandoned", "- - -", Color::Gray),
        }
    }
}

impl Presenter<Snapshot> for Scoreboard {
    fn render(&self, frame: &mut Frame, snapshot: &Snapshot) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(7),
                Constraint::Length(2),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(frame.area());

        frame.render_widget(Self::status_bar(snapshot), chunks[0]);

        let board_area = Rect { width: chunks[1].width.min(32), ..chunks[1] };
        frame.render_widget(Self::board(snapshot), board_area);

        if let Some(banner) = Self::banner(snapshot.phase) {
            frame.render_widget(banner, chunks[2]);
        }

        frame.render_widget(
            Paragraph::new("1-6 show fingers, 0/space drop hand, q/Esc quit")
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Gray)),
            chunks[4],
        );
    }

    fn render_result(&self, frame: &mut Frame, snapshot: &Snapshot) {
        let (message, symbol, color) = Self::verdict(snapshot.final_result);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([Constraint::Length(3), Constraint::Min(0), Constraint::Length(1)])
            .split(frame.area());

        frame.render_widget(
            Paragraph::new("*** GAME OVER ***")
                .alignment(Alignment::Center)
                .style(Style::default().add_modifier(Modifier::BOLD)),
            chunks[0],
        );

        let card = vec![
            Line::from(Span::styled(message, Style::default().fg(color).add_modifier(Modifier::BOLD))),
            Line::from(""),
            Line::from(symbol),
            Line::from(""),
            Line::from(format!("Player Score: {}", snapshot.player_score)),
            Line::from(format!("Computer Score: {}", snapshot.computer_score)),
        ];
        frame.render_widget(
            Paragraph::new(card)
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(color))),
            chunks[1],
        );

        frame.render_widget(
            Paragraph::new("Press any key to exit").alignment(Alignment::Center),
            chunks[2],
        );
    }
}

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState, Wrap},
};
use rust_decimal::Decimal;
use strum::IntoEnumIterator;

use crate::{
    app::{
        AddHoldingForm, FormField, calc,
        utils::{format_money, format_percent},
    },
    models::{Holding, PnlClass, PortfolioMetrics},
};

fn pnl_color(value: Option<Decimal>) -> Color {
    match value.map(calc::pnl_class) {
        Some(PnlClass::Positive) => Color::Green,
        Some(PnlClass::Negative) => Color::Red,
        None => Color::Gray,
    }
}

#[allow(clippy::too_many_arguments)]
pub fn render(
    frame: &mut Frame,
    holdings: &[Holding],
    metrics: &PortfolioMetrics,
    table_state: &mut TableState,
    form: Option<&AddHoldingForm>,
    popup_message: &Option<String>,
    error_popup: &Option<String>,
    status: &str,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let title = Paragraph::new("Portfolio Tracker")
        .style(Style::default().fg(Color::Cyan))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    render_summary(frame, metrics, chunks[1]);
    render_holdings(frame, holdings, table_state, chunks[2]);

    let help = Paragraph::new(Line::from(vec![
        Span::styled(status.to_string(), Style::default().fg(Color::White)),
        Span::styled(
            "   a: add  F5: refresh  ↑/↓: select  q: quit",
            Style::default().fg(Color::DarkGray),
        ),
    ]))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[3]);

    if let Some(form) = form {
        render_form(frame, form);
    }

    if let Some(message) = popup_message {
        render_message(frame, "Working", message, Color::Yellow);
    }

    if let Some(message) = error_popup {
        render_message(frame, "Error", message, Color::Red);
    }
}

fn render_summary(frame: &mut Frame, metrics: &PortfolioMetrics, area: Rect) {
    let profit_loss = *metrics.profit_loss();
    let performance = *metrics.performance_percent();

    let line = Line::from(vec![
        Span::styled("Total Value: ", Style::default().fg(Color::Yellow)),
        Span::raw(format_money(Some(*metrics.total_value()))),
        Span::styled("   Total Invested: ", Style::default().fg(Color::Yellow)),
        Span::raw(format_money(Some(*metrics.total_invested()))),
        Span::styled("   Profit/Loss: ", Style::default().fg(Color::Yellow)),
        Span::styled(
            format_money(Some(profit_loss)),
            Style::default().fg(pnl_color(Some(profit_loss))),
        ),
        Span::styled("   Performance: ", Style::default().fg(Color::Yellow)),
        Span::styled(
            format_percent(Some(performance)),
            Style::default().fg(pnl_color(Some(performance))),
        ),
    ]);

    let summary = Paragraph::new(line).block(Block::default().title("Summary").borders(Borders::ALL));
    frame.render_widget(summary, area);
}

fn render_holdings(frame: &mut Frame, holdings: &[Holding], table_state: &mut TableState, area: Rect) {
    if holdings.is_empty() {
        let empty_message = Paragraph::new("No stocks added yet.")
            .style(Style::default().fg(Color::Yellow))
            .block(Block::default().title("Stock List").borders(Borders::ALL));
        frame.render_widget(empty_message, area);
        return;
    }

    let header_cells = [
        "Symbol",
        "Quantity",
        "Purchase Price",
        "Current Price",
        "Profit/Loss",
        "Return %",
    ]
    .iter()
    .map(|h| Cell::from(*h).style(Style::default().fg(Color::Yellow)));
    let header = Row::new(header_cells).style(Style::default()).height(1);

    let rows = holdings.iter().map(|holding| {
        let performance = calc::holding_performance(holding);
        let profit_loss = *performance.profit_loss();
        let return_percent = *performance.return_percent();

        let cells = [
            Cell::from(holding.symbol().clone()),
            Cell::from(holding.quantity().to_string()),
            Cell::from(format_money(Some(*holding.purchase_price()))),
            Cell::from(format_money(Some(*holding.current_price()))),
            Cell::from(format_money(profit_loss)).style(Style::default().fg(pnl_color(profit_loss))),
            Cell::from(format_percent(return_percent))
                .style(Style::default().fg(pnl_color(return_percent))),
        ];

        Row::new(cells).height(1)
    });

    let widths = [
        Constraint::Length(10),
        Constraint::Length(10),
        Constraint::Length(16),
        Constraint::Length(16),
        Constraint::Length(16),
        Constraint::Length(12),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().title("Stock List").borders(Borders::ALL))
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    frame.render_stateful_widget(table, area, table_state);
}

fn render_form(frame: &mut Frame, form: &AddHoldingForm) {
    let area = centered_rect(50, 11, frame.area());
    frame.render_widget(Clear, area);

    let mut lines = Vec::new();
    for field in FormField::iter() {
        let focused = *form.focus() == field;
        let value = form.value(field);
        let label_style = if focused {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Yellow)
        };
        let value_span = if value.is_empty() {
            Span::styled(field.placeholder(), Style::default().fg(Color::DarkGray))
        } else {
            Span::raw(value.to_string())
        };

        lines.push(Line::from(vec![
            Span::styled(format!("{:<16}", format!("{}:", field)), label_style),
            value_span,
        ]));
        lines.push(Line::default());
    }

    if let Some(error) = form.error() {
        lines.push(Line::from(Span::styled(error.clone(), Style::default().fg(Color::Red))));
    } else {
        lines.push(Line::from(Span::styled(
            "Tab: next field  Enter: add stock  Esc: cancel",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let popup = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().title("Add a Stock").borders(Borders::ALL));
    frame.render_widget(popup, area);
}

fn render_message(frame: &mut Frame, title: &str, message: &str, color: Color) {
    let area = centered_rect(40, 5, frame.area());
    frame.render_widget(Clear, area);

    let popup = Paragraph::new(message.to_string())
        .style(Style::default().fg(color))
        .wrap(Wrap { trim: true })
        .block(Block::default().title(title.to_string()).borders(Borders::ALL));
    frame.render_widget(popup, area);
}

fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Padding, Paragraph, Wrap},
};

use crate::app::{ActiveToast, AppState};
use crate::config;
use crate::theme;
use crate::toast::Gravity;
use crate::wifi::{ConnectedState, RowView};

pub fn render(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    // Set background color for the entire screen
    frame.render_widget(
        Block::default().style(Style::default().bg(theme::BACKGROUND).fg(theme::FOREGROUND)),
        area,
    );

    let height = config::MAIN_WINDOW_HEIGHT.min(area.height);
    let width = config::MAIN_WINDOW_WIDTH.min(area.width);

    // Center the main window
    let vertical_layout = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .split(area);

    let horizontal_layout = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(width),
        Constraint::Fill(1),
    ])
    .split(vertical_layout[1]);

    let main_area = horizontal_layout[1];

    let main_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme::DIMMED))
        .title(format!(" WIFIPICK v{} ", env!("CARGO_PKG_VERSION")))
        .title_alignment(Alignment::Center)
        .title_style(
            Style::default()
                .fg(theme::CYAN)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_widget(main_block, main_area);

    let inner_area = main_area.inner(Margin {
        vertical: 1,
        horizontal: 2,
    });

    let content_layout = Layout::vertical([
        Constraint::Min(8),    // Network list
        Constraint::Length(8), // Details
        Constraint::Length(1), // Bottom bar
    ])
    .split(inner_area);

    let (list_area, details_area, help_area) =
        (content_layout[0], content_layout[1], content_layout[2]);

    // Rebind every row; binding is where icon level, divider and the
    // help/friction slots get decided.
    let mut views: Vec<RowView> = Vec::with_capacity(state.rows.len());
    for row in &mut state.rows {
        let mut view = RowView::new();
        row.bind(&mut view);
        views.push(view);
    }

    let list_items: Vec<ListItem> = state
        .rows
        .iter()
        .zip(&views)
        .map(|(row, view)| {
            let connected = row.entry().connected_state() == ConnectedState::Connected;

            let mut spans = Vec::new();
            match &view.icon {
                Some(icon) => {
                    spans.push(Span::styled(icon.glyph, Style::default().fg(icon.tint)));
                    if let Some(badge) = icon.badge {
                        spans.push(Span::styled(badge, Style::default().fg(icon.tint)));
                    }
                    spans.push(Span::raw(" "));
                }
                None => spans.push(Span::raw("  ")),
            }

            let title_style = if connected {
                Style::default()
                    .fg(theme::GREEN)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            spans.push(Span::styled(view.title.clone(), title_style));

            if connected {
                let glyph = state.icons.glyph("connected").unwrap_or("");
                spans.push(Span::styled(
                    format!(" {glyph}"),
                    Style::default().fg(theme::GREEN),
                ));
            }

            if let Some(help) = &view.help_button {
                let glyph = help.icon.as_ref().map(|icon| icon.glyph).unwrap_or("?");
                spans.push(Span::styled(
                    format!(" {glyph}"),
                    Style::default().fg(theme::CYAN),
                ));
            }
            if let Some(friction) = &view.friction_icon {
                spans.push(Span::styled(
                    format!(" {}", friction.glyph),
                    Style::default().fg(friction.tint),
                ));
            }

            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(list_items)
        .block(
            Block::default()
                .title(" Networks ")
                .title_style(
                    Style::default()
                        .fg(theme::BLUE)
                        .add_modifier(Modifier::BOLD),
                )
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(theme::BLUE)),
        )
        .highlight_symbol(state.icons.highlight())
        .highlight_style(
            Style::default()
                .add_modifier(Modifier::BOLD)
                .bg(theme::SELECTION_BG),
        );

    frame.render_stateful_widget(list, list_area, &mut state.l_state);

    if let Some(selected) = state.l_state.selected() {
        if let (Some(row), Some(view)) = (state.rows.get(selected), views.get(selected)) {
            let label_style = Style::default().fg(theme::CYAN);
            let level = row.entry().level().clamp(0, 4) as usize;

            let info = vec![
                Line::from(vec![
                    Span::styled("SSID: ", label_style),
                    Span::raw(view.title.clone()),
                ]),
                Line::from(vec![
                    Span::styled("Signal: ", label_style),
                    Span::styled(
                        "█".repeat(level * 2),
                        if level >= 3 {
                            Style::default().fg(theme::GREEN)
                        } else if level == 2 {
                            Style::default().fg(theme::YELLOW)
                        } else {
                            Style::default().fg(theme::RED)
                        },
                    ),
                ]),
                Line::from(vec![
                    Span::styled("Status: ", label_style),
                    Span::raw(view.summary.clone()),
                ]),
                Line::from(vec![
                    Span::styled("Described as: ", label_style),
                    Span::styled(
                        view.content_description.clone(),
                        Style::default().fg(theme::DIMMED),
                    ),
                ]),
            ];

            let paragraph = Paragraph::new(info).wrap(Wrap { trim: true }).block(
                Block::default()
                    .title(" Details ")
                    .title_style(
                        Style::default()
                            .fg(theme::PURPLE)
                            .add_modifier(Modifier::BOLD),
                    )
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(theme::PURPLE))
                    .padding(Padding::new(1, 1, 0, 0)),
            );
            frame.render_widget(paragraph, details_area);
        }
    }

    let help_text = vec![Line::from(vec![
        Span::styled("q", Style::default().fg(theme::FOREGROUND)),
        Span::styled(" quit • ", Style::default().fg(theme::DIMMED)),
        Span::styled("j/k", Style::default().fg(theme::FOREGROUND)),
        Span::styled(" nav • ", Style::default().fg(theme::DIMMED)),
        Span::styled("?", Style::default().fg(theme::FOREGROUND)),
        Span::styled(" help link • ", Style::default().fg(theme::DIMMED)),
        Span::styled("t", Style::default().fg(theme::FOREGROUND)),
        Span::styled(" toast", Style::default().fg(theme::DIMMED)),
    ])];
    let help_paragraph = Paragraph::new(help_text)
        .style(Style::default().fg(theme::DIMMED))
        .alignment(Alignment::Center);

    frame.render_widget(help_paragraph, help_area);

    for toast in &state.toasts {
        render_toast(frame, area, toast);
    }

    if state.show_key_logger {
        if let Some((key, time)) = &state.last_key_press {
            if time.elapsed() < std::time::Duration::from_secs(config::KEY_LOGGER_LINGER_SECS) {
                let key_text = format!(" {} ", key);
                let width = key_text.len() as u16 + 2;

                let key_area = Rect::new(
                    main_area.x + main_area.width.saturating_sub(width),
                    (main_area.y + main_area.height).min(area.height.saturating_sub(3)),
                    width,
                    3,
                );

                let block = Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(theme::PURPLE))
                    .style(Style::default().bg(theme::BACKGROUND));

                let paragraph = Paragraph::new(key_text)
                    .block(block)
                    .style(
                        Style::default()
                            .fg(theme::PURPLE)
                            .add_modifier(Modifier::BOLD),
                    )
                    .alignment(Alignment::Center);

                frame.render_widget(Clear, key_area);
                frame.render_widget(paragraph, key_area);
            }
        }
    }
}

/// Places one toast from its gravity/offset/margin getters plus the current
/// animation offset, then draws it with a stepped fade.
fn render_toast(frame: &mut Frame, area: Rect, active: &ActiveToast) {
    let toast = &active.toast;
    let view = toast.view();
    let ((dx, dy), opacity) = active.animation();

    let badge_width = view
        .badge
        .as_ref()
        .map(|badge| {
            badge.glyph.chars().count() as u16
                + badge.profile_badge.map_or(0, |b| b.chars().count() as u16)
                + 1
        })
        .unwrap_or(0);
    let text_width = view.text.chars().count() as u16 + badge_width;

    let usable = area
        .width
        .saturating_sub(2 * toast.horizontal_margin())
        .saturating_sub(2);
    let toast_width = (text_width + 4).min(config::TOAST_MAX_WIDTH).min(usable);
    let toast_height: u16 = 3;

    let x = (area.width.saturating_sub(toast_width)) as i32 / 2 + toast.x_offset() as i32;
    let y = match toast.gravity() {
        Gravity::Top => (toast.vertical_margin() as i32) + toast.y_offset() as i32,
        Gravity::Center => {
            (area.height.saturating_sub(toast_height)) as i32 / 2 + toast.y_offset() as i32
        }
        Gravity::Bottom => {
            area.height as i32
                - toast_height as i32
                - toast.vertical_margin() as i32
                - toast.y_offset() as i32
        }
    };

    let x = (x + dx as i32).clamp(0, area.width.saturating_sub(toast_width) as i32) as u16;
    let y = (y + dy as i32).clamp(0, area.height.saturating_sub(toast_height) as i32) as u16;
    let toast_area = Rect::new(x, y, toast_width, toast_height);

    let fg = if opacity < 0.4 {
        theme::DIMMED
    } else {
        theme::FOREGROUND
    };

    let mut spans = Vec::new();
    if let Some(badge) = &view.badge {
        spans.push(Span::styled(
            badge.glyph.clone(),
            Style::default().fg(theme::CYAN),
        ));
        if let Some(profile_badge) = badge.profile_badge {
            spans.push(Span::styled(
                profile_badge,
                Style::default().fg(theme::YELLOW),
            ));
        }
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled(view.text.clone(), Style::default().fg(fg)));

    let paragraph = Paragraph::new(Line::from(spans))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(fg))
                .padding(Padding::new(1, 1, 0, 0)),
        )
        .style(Style::default().fg(fg).bg(theme::BACKGROUND))
        .alignment(Alignment::Left);

    frame.render_widget(Clear, toast_area);
    frame.render_widget(paragraph, toast_area);
}

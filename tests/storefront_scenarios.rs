//! End-to-end walks through the storefront on a paused tokio clock.

mod common;

use std::time::Duration;

use common::*;
use crossterm::event::{Event, KeyCode};
use hatstore::app::{AppMessage, ShellMode};
use hatstore::catalog::{find_item, sample_items, supplement_for, STORE_TITLE};
use hatstore::config::StoreConfig;
use hatstore::ui::interaction::ClickAction;
use hatstore::ui::CLOSE_LABEL;
use tokio::time::Instant;

#[tokio::test(start_paused = true)]
async fn test_catalog_loads_after_delay() {
    let (mut app, mut rx) = app_with_receiver(StoreConfig::default());
    let started = Instant::now();
    app.start();

    assert_eq!(app.mode(), ShellMode::Browsing);
    let frame = render_app(&mut app);
    assert!(frame.contains("Loading..."));
    assert!(!frame.contains("Classic Fedora"));

    tokio::time::sleep(Duration::from_millis(1999)).await;
    assert!(rx.try_recv().is_err());
    assert!(render_app(&mut app).contains("Loading..."));

    let msg = deliver_next(&mut app, &mut rx).await;
    assert!(matches!(msg, AppMessage::CatalogLoaded { .. }));
    assert!(started.elapsed() >= Duration::from_millis(2000));

    let frame = render_app(&mut app);
    assert!(!frame.contains("Loading..."));
    assert!(frame.contains(STORE_TITLE));
    let mut last = 0;
    for item in sample_items() {
        let pos = frame.find(&item.name).unwrap_or_else(|| panic!("{} missing", item.name));
        assert!(pos > last);
        last = pos;
    }
}

#[tokio::test(start_paused = true)]
async fn test_loaded_result_is_exactly_the_payload() {
    let items = vec![
        hatstore::models::Item::new(10, "Fez", "Red felt, black tassel."),
        hatstore::models::Item::new(11, "Beret", "Flat wool crown."),
    ];
    let mut app = hatstore::app::App::with_items(StoreConfig::default(), items.clone());
    let mut rx = app.message_rx.take().unwrap();
    app.start();

    deliver_next(&mut app, &mut rx).await;
    assert_eq!(app.items(), Some(items.as_slice()));
}

#[tokio::test(start_paused = true)]
async fn test_clicking_item_three_opens_its_detail() {
    let (mut app, mut rx) = app_with_receiver(StoreConfig::default());
    app.start();
    deliver_next(&mut app, &mut rx).await;
    render_app(&mut app);

    let top_hat = find_item(3).unwrap();
    let (x, y) = position_of(&app, &ClickAction::SelectItem(top_hat.clone())).unwrap();
    app.handle_event(Event::Mouse(left_click(x + 2, y)));

    assert_eq!(app.mode(), ShellMode::Viewing);
    assert_eq!(app.selected_item().map(|i| i.id), Some(3));

    let frame = render_app(&mut app);
    assert!(frame.contains(&top_hat.name));
    assert!(frame.contains("Tall silk plush crown."));
}

#[tokio::test(start_paused = true)]
async fn test_detail_runs_its_own_loader() {
    let (mut app, mut rx) = app_with_receiver(StoreConfig::default());
    app.start();
    deliver_next(&mut app, &mut rx).await;

    app.handle_event(Event::Key(key(KeyCode::Down)));
    app.handle_event(Event::Key(key(KeyCode::Down)));
    app.handle_event(Event::Key(key(KeyCode::Enter)));
    let opened = Instant::now();

    let item = find_item(3).unwrap();
    let supplement = supplement_for(&item);
    let frame = render_app(&mut app);
    assert!(frame.contains("Loading..."));
    assert!(!frame.contains(&supplement.caption));

    let msg = deliver_next(&mut app, &mut rx).await;
    assert!(matches!(msg, AppMessage::SupplementLoaded { .. }));
    assert!(opened.elapsed() >= Duration::from_millis(2000));

    let frame = render_app(&mut app);
    assert!(!frame.contains("Loading..."));
    assert!(frame.contains(&supplement.caption));
}

#[tokio::test(start_paused = true)]
async fn test_close_button_returns_to_browsing() {
    let (mut app, mut rx) = app_with_receiver(StoreConfig::default());
    app.start();
    deliver_next(&mut app, &mut rx).await;
    app.select_item(find_item(2).unwrap());
    render_app(&mut app);

    let (x, y) = position_of(&app, &ClickAction::CloseDetail).unwrap();
    app.handle_event(Event::Mouse(left_click(x, y)));

    assert_eq!(app.mode(), ShellMode::Browsing);
    assert!(app.selected_item().is_none());

    let frame = render_app(&mut app);
    assert!(!frame.contains(CLOSE_LABEL));
    assert!(position_of(&app, &ClickAction::ModalBody).is_none());
}

#[tokio::test(start_paused = true)]
async fn test_click_outside_or_escape_closes() {
    let (mut app, mut rx) = app_with_receiver(StoreConfig::default());
    app.start();
    deliver_next(&mut app, &mut rx).await;

    app.select_item(find_item(1).unwrap());
    render_app(&mut app);
    app.handle_event(Event::Mouse(left_click(0, 0)));
    assert!(!app.detail_visible());

    app.select_item(find_item(1).unwrap());
    app.handle_event(Event::Key(key(KeyCode::Esc)));
    assert!(!app.detail_visible());
}

#[tokio::test(start_paused = true)]
async fn test_click_inside_modal_keeps_it_open() {
    let (mut app, mut rx) = app_with_receiver(StoreConfig::default());
    app.start();
    deliver_next(&mut app, &mut rx).await;

    app.select_item(find_item(6).unwrap());
    render_app(&mut app);
    let (x, y) = position_of(&app, &ClickAction::ModalBody).unwrap();
    app.handle_event(Event::Mouse(left_click(x + 1, y + 1)));

    assert_eq!(app.selected_item().map(|i| i.id), Some(6));
}

#[tokio::test(start_paused = true)]
async fn test_closing_before_supplement_arrives_drops_update() {
    let (mut app, mut rx) = app_with_receiver(StoreConfig::default());
    app.start();
    deliver_next(&mut app, &mut rx).await;

    app.select_item(find_item(4).unwrap());
    tokio::time::sleep(Duration::from_millis(500)).await;
    app.close_detail();

    tokio::time::sleep(Duration::from_millis(5000)).await;
    assert!(rx.try_recv().is_err());
    assert_eq!(app.mode(), ShellMode::Browsing);
    assert!(!render_app(&mut app).contains("Loading..."));
}

#[tokio::test(start_paused = true)]
async fn test_switching_items_only_applies_latest_supplement() {
    let (mut app, mut rx) = app_with_receiver(StoreConfig::default());
    app.start();
    deliver_next(&mut app, &mut rx).await;

    app.select_item(find_item(1).unwrap());
    tokio::time::sleep(Duration::from_millis(1000)).await;
    let second = find_item(5).unwrap();
    app.select_item(second.clone());

    let msg = deliver_next(&mut app, &mut rx).await;
    match msg {
        AppMessage::SupplementLoaded { supplement, .. } => assert_eq!(supplement.item_id, 5),
        other => panic!("unexpected message: {other:?}"),
    }
    tokio::time::sleep(Duration::from_millis(5000)).await;
    assert!(rx.try_recv().is_err());

    let frame = render_app(&mut app);
    assert!(frame.contains(&supplement_for(&second).caption));
}

#[tokio::test(start_paused = true)]
async fn test_reopening_an_item_restarts_its_loader() {
    let (mut app, mut rx) = app_with_receiver(StoreConfig::default());
    app.start();
    deliver_next(&mut app, &mut rx).await;

    app.select_item(find_item(2).unwrap());
    deliver_next(&mut app, &mut rx).await;
    assert!(!app.shell.is_loading());

    app.close_detail();
    app.select_item(find_item(2).unwrap());
    assert!(app.shell.is_loading());
    assert!(render_app(&mut app).contains("Loading..."));
}

#[tokio::test(start_paused = true)]
async fn test_quit_keys() {
    let (mut app, _rx) = app_with_receiver(StoreConfig::default());
    app.start();

    // The list is still loading; q quits from browsing regardless
    app.handle_event(Event::Key(key(KeyCode::Char('q'))));
    assert!(app.should_quit);
}

use std::time::Duration;

use crossterm::event::{self, Event as TermEvent, KeyEvent};

use api_types::{
    money_map::{MoneyMapNew, MoneyMapUpdate},
    user::UserUpdate,
};
use money_map_client::{
    actions::{self, Effects, Navigator},
    api::ApiClient,
    auth::{self, Route, RouteDecision},
    store::{AlertPayload, Event, Store},
    token_store::FileTokenStore,
};

use crate::{
    config::AppConfig,
    error::{AppError, Result},
    ui,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    MoneyMaps,
    AddMoneyMap,
    MoneyMap,
    Account,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Email,
    Password,
}

#[derive(Debug, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub focus: LoginField,
}

#[derive(Debug, Default)]
pub struct MoneyMapsView {
    pub selected: usize,
}

#[derive(Debug, Default)]
pub struct AddMoneyMapForm {
    pub name: String,
}

#[derive(Debug, Default)]
pub struct MoneyMapView {
    pub selected: usize,
    /// Pending rename, seeded from the slice when editing is enabled.
    pub name_input: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccountField {
    #[default]
    FirstName,
    LastName,
    Email,
}

#[derive(Debug, Default)]
pub struct AccountForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub focus: AccountField,
}

/// Routes pushed by action creators are collected here and applied by
/// the event loop once the action has finished.
#[derive(Debug, Default)]
struct Nav {
    pending: Vec<Route>,
}

impl Navigator for Nav {
    fn push(&mut self, route: Route) {
        self.pending.push(route);
    }
}

pub struct App {
    api: ApiClient,
    pub store: Store,
    tokens: FileTokenStore,
    nav: Nav,
    pub screen: Screen,
    /// Id of the money map shown by [`Screen::MoneyMap`].
    pub current_map: Option<String>,
    /// Where to return after a guard-forced login.
    return_to: Option<Route>,
    pub login: LoginForm,
    pub money_maps_view: MoneyMapsView,
    pub add_form: AddMoneyMapForm,
    pub map_view: MoneyMapView,
    pub account_form: AccountForm,
    /// Submit guard: set while a request is outstanding so rapid
    /// repeated submissions cannot race each other.
    pub busy: bool,
    should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self> {
        let api = ApiClient::new(&config.base_url)?;
        let tokens = FileTokenStore::new(&config.token_path);
        Ok(Self {
            api,
            store: Store::new(),
            tokens,
            nav: Nav::default(),
            screen: Screen::Login,
            current_map: None,
            return_to: None,
            login: LoginForm::default(),
            money_maps_view: MoneyMapsView::default(),
            add_form: AddMoneyMapForm::default(),
            map_view: MoneyMapView::default(),
            account_form: AccountForm::default(),
            busy: false,
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut terminal = ui::TerminalGuard::acquire()?;
        // Land on the money maps view; the guard bounces us to login
        // when no session is persisted.
        self.navigate(Route::MoneyMaps).await;
        self.event_loop(&mut terminal).await
    }

    async fn event_loop(&mut self, terminal: &mut ui::TerminalGuard) -> Result<()> {
        let tick_rate = Duration::from_millis(200);

        while !self.should_quit {
            terminal
                .draw(|frame| ui::render(frame, self))
                .map_err(|err| AppError::Terminal(err.to_string()))?;

            if event::poll(tick_rate)? {
                match event::read()? {
                    TermEvent::Key(key) => self.handle_key(key).await,
                    TermEvent::Resize(_, _) => {}
                    _ => {}
                }
            }
        }

        Ok(())
    }

    async fn handle_key(&mut self, key: KeyEvent) {
        use crate::ui::keymap::AppAction;

        match crate::ui::keymap::map_key(key) {
            AppAction::Quit => self.should_quit = true,
            AppAction::Cancel => self.handle_cancel().await,
            AppAction::NextField => self.advance_focus(),
            AppAction::Submit => self.submit().await,
            AppAction::Backspace => self.backspace(),
            AppAction::Up => self.select_prev(),
            AppAction::Down => self.select_next(),
            AppAction::Input(ch) => self.input(ch).await,
            AppAction::None => {}
        }
    }

    /// Pushes a route through the guard and applies any follow-up
    /// navigation an action requested.
    async fn navigate(&mut self, route: Route) {
        self.nav.pending.push(route);
        while !self.nav.pending.is_empty() {
            let route = self.nav.pending.remove(0);
            self.goto(route).await;
        }
    }

    async fn goto(&mut self, route: Route) {
        tracing::debug!(?route, "navigating");
        match auth::authorize(route.clone(), &self.tokens, &mut self.store) {
            RouteDecision::Allow => {}
            RouteDecision::RedirectToLogin { from } => {
                tracing::info!(?from, "navigation requires a session, showing login");
                self.return_to = Some(from);
                self.screen = Screen::Login;
                return;
            }
        }

        match route {
            Route::Login => {
                self.screen = Screen::Login;
            }
            Route::MoneyMaps => {
                self.screen = Screen::MoneyMaps;
                self.money_maps_view.selected = 0;
                let mut fx = Effects {
                    store: &mut self.store,
                    tokens: &self.tokens,
                    nav: &mut self.nav,
                };
                actions::get_money_maps(&self.api, &mut fx).await;
            }
            Route::AddMoneyMap => {
                self.add_form.name.clear();
                self.screen = Screen::AddMoneyMap;
            }
            Route::MoneyMap(id) => {
                if self.store.state().money_maps.get(&id).is_none() {
                    // The id may come from a listing fetched before the
                    // map changed server-side; refresh once.
                    let mut fx = Effects {
                        store: &mut self.store,
                        tokens: &self.tokens,
                        nav: &mut self.nav,
                    };
                    actions::get_accounts(&self.api, &mut fx).await;
                }
                if self.store.state().money_maps.get(&id).is_some() {
                    self.current_map = Some(id);
                    self.map_view = MoneyMapView::default();
                    self.screen = Screen::MoneyMap;
                } else {
                    let mut fx = Effects {
                        store: &mut self.store,
                        tokens: &self.tokens,
                        nav: &mut self.nav,
                    };
                    actions::missing_money_map(&mut fx, Route::MoneyMaps);
                }
            }
            Route::Account => {
                self.screen = Screen::Account;
                let mut fx = Effects {
                    store: &mut self.store,
                    tokens: &self.tokens,
                    nav: &mut self.nav,
                };
                actions::get_account(&self.api, &mut fx).await;
            }
        }
    }

    async fn handle_cancel(&mut self) {
        match self.screen {
            Screen::Login | Screen::MoneyMaps => self.should_quit = true,
            Screen::AddMoneyMap | Screen::MoneyMap | Screen::Account => {
                self.navigate(Route::MoneyMaps).await;
            }
        }
    }

    fn advance_focus(&mut self) {
        match self.screen {
            Screen::Login => {
                self.login.focus = match self.login.focus {
                    LoginField::Email => LoginField::Password,
                    LoginField::Password => LoginField::Email,
                };
            }
            Screen::Account if self.store.state().forms.account_edit_enabled => {
                self.account_form.focus = match self.account_form.focus {
                    AccountField::FirstName => AccountField::LastName,
                    AccountField::LastName => AccountField::Email,
                    AccountField::Email => AccountField::FirstName,
                };
            }
            _ => {}
        }
    }

    fn backspace(&mut self) {
        match self.screen {
            Screen::Login => {
                self.active_login_field_mut().pop();
            }
            Screen::AddMoneyMap => {
                self.add_form.name.pop();
            }
            Screen::MoneyMap if self.store.state().forms.money_map_edit_enabled => {
                self.map_view.name_input.pop();
            }
            Screen::Account if self.store.state().forms.account_edit_enabled => {
                self.active_account_field_mut().pop();
            }
            _ => {}
        }
    }

    fn select_prev(&mut self) {
        match self.screen {
            Screen::MoneyMaps => {
                self.money_maps_view.selected = self.money_maps_view.selected.saturating_sub(1);
            }
            Screen::MoneyMap => {
                self.map_view.selected = self.map_view.selected.saturating_sub(1);
            }
            _ => {}
        }
    }

    fn select_next(&mut self) {
        match self.screen {
            Screen::MoneyMaps => {
                let len = self.store.state().money_maps.money_maps().len();
                if len > 0 {
                    self.money_maps_view.selected =
                        (self.money_maps_view.selected + 1).min(len - 1);
                }
            }
            Screen::MoneyMap => {
                let len = self
                    .current_map_accounts_len()
                    .unwrap_or_default();
                if len > 0 {
                    self.map_view.selected = (self.map_view.selected + 1).min(len - 1);
                }
            }
            _ => {}
        }
    }

    async fn submit(&mut self) {
        if self.busy {
            tracing::debug!("submit ignored while a request is in flight");
            return;
        }
        match self.screen {
            Screen::Login => self.attempt_login().await,
            Screen::MoneyMaps => self.open_selected_map().await,
            Screen::AddMoneyMap => self.submit_new_map().await,
            Screen::MoneyMap => self.submit_map_rename().await,
            Screen::Account => self.submit_account_update().await,
        }
    }

    async fn input(&mut self, ch: char) {
        match self.screen {
            Screen::Login => self.active_login_field_mut().push(ch),
            Screen::AddMoneyMap => self.add_form.name.push(ch),
            Screen::MoneyMaps => self.handle_command(ch).await,
            Screen::MoneyMap => {
                if self.store.state().forms.money_map_edit_enabled {
                    self.map_view.name_input.push(ch);
                } else {
                    self.handle_command(ch).await;
                }
            }
            Screen::Account => {
                if self.store.state().forms.account_edit_enabled {
                    self.active_account_field_mut().push(ch);
                } else {
                    self.handle_command(ch).await;
                }
            }
        }
    }

    /// Single-key commands available outside text entry.
    async fn handle_command(&mut self, ch: char) {
        if let Some(digit) = ch.to_digit(10) {
            if digit >= 1 {
                self.dismiss_alert(digit as usize - 1);
            }
            return;
        }

        match ch {
            'q' | 'Q' => self.should_quit = true,
            'm' | 'M' | 'b' | 'B' => self.navigate(Route::MoneyMaps).await,
            'p' | 'P' => self.navigate(Route::Account).await,
            'a' | 'A' if self.screen == Screen::MoneyMaps => {
                self.navigate(Route::AddMoneyMap).await;
            }
            'r' | 'R' => match self.screen {
                Screen::MoneyMaps => {
                    let mut fx = Effects {
                        store: &mut self.store,
                        tokens: &self.tokens,
                        nav: &mut self.nav,
                    };
                    actions::get_money_maps(&self.api, &mut fx).await;
                }
                Screen::MoneyMap => {
                    let mut fx = Effects {
                        store: &mut self.store,
                        tokens: &self.tokens,
                        nav: &mut self.nav,
                    };
                    actions::get_accounts(&self.api, &mut fx).await;
                }
                _ => {}
            },
            'e' | 'E' => self.enable_edit(),
            _ => {}
        }
    }

    /// Resolves the displayed ordinal to the alert's stable id before
    /// dispatching, so a list that shifted since the last render can
    /// never dismiss the wrong alert.
    fn dismiss_alert(&mut self, ordinal: usize) {
        let id = self
            .store
            .state()
            .alerts
            .alerts()
            .get(ordinal)
            .map(|alert| alert.id);
        if let Some(id) = id {
            self.store.dispatch(Event::RemoveAlert(id));
        }
    }

    fn enable_edit(&mut self) {
        match self.screen {
            Screen::MoneyMap => {
                let name = self
                    .current_map
                    .as_deref()
                    .and_then(|id| self.store.state().money_maps.get(id))
                    .map(|entry| entry.name.clone());
                if let Some(name) = name {
                    self.map_view.name_input = name;
                    self.store.dispatch(Event::EnableMoneyMapEdit);
                }
            }
            Screen::Account => {
                let session = &self.store.state().session;
                self.account_form.first_name = session.first_name.clone();
                self.account_form.last_name = session.last_name.clone();
                self.account_form.email = session.email.clone();
                self.account_form.focus = AccountField::FirstName;
                self.store.dispatch(Event::EnableAccountEdit);
            }
            _ => {}
        }
    }

    async fn attempt_login(&mut self) {
        let email = self.login.email.trim().to_string();
        let password = self.login.password.trim().to_string();
        if email.is_empty() || password.is_empty() {
            self.store.dispatch(Event::AddAlert(AlertPayload::danger(
                "Please enter email and password.",
            )));
            return;
        }

        let redirect = self.return_to.take().unwrap_or(Route::MoneyMaps);
        self.busy = true;
        let mut fx = Effects {
            store: &mut self.store,
            tokens: &self.tokens,
            nav: &mut self.nav,
        };
        actions::login(&self.api, &mut fx, &email, &password, redirect).await;
        self.busy = false;
        self.login.password.clear();
        self.drain_navigation().await;
    }

    async fn open_selected_map(&mut self) {
        let id = self
            .store
            .state()
            .money_maps
            .money_maps()
            .get_index(self.money_maps_view.selected)
            .map(|(id, _)| id.clone());
        if let Some(id) = id {
            self.navigate(Route::MoneyMap(id)).await;
        }
    }

    async fn submit_new_map(&mut self) {
        let name = self.add_form.name.trim().to_string();
        if name.is_empty() {
            return;
        }

        self.busy = true;
        let mut fx = Effects {
            store: &mut self.store,
            tokens: &self.tokens,
            nav: &mut self.nav,
        };
        actions::create_money_map(&self.api, &mut fx, MoneyMapNew { name }, Route::MoneyMaps)
            .await;
        self.busy = false;
        self.drain_navigation().await;
    }

    async fn submit_map_rename(&mut self) {
        if !self.store.state().forms.money_map_edit_enabled {
            return;
        }
        let Some(id) = self.current_map.clone() else {
            return;
        };
        let name = self.map_view.name_input.trim().to_string();
        if name.is_empty() {
            return;
        }

        self.busy = true;
        let mut fx = Effects {
            store: &mut self.store,
            tokens: &self.tokens,
            nav: &mut self.nav,
        };
        actions::update_money_map(
            &self.api,
            &mut fx,
            MoneyMapUpdate { id, name },
            Route::MoneyMaps,
        )
        .await;
        self.busy = false;
        self.drain_navigation().await;
    }

    async fn submit_account_update(&mut self) {
        if !self.store.state().forms.account_edit_enabled {
            return;
        }

        let update = UserUpdate {
            email: Some(self.account_form.email.trim().to_string()),
            first_name: Some(self.account_form.first_name.trim().to_string()),
            last_name: Some(self.account_form.last_name.trim().to_string()),
        };

        self.busy = true;
        let mut fx = Effects {
            store: &mut self.store,
            tokens: &self.tokens,
            nav: &mut self.nav,
        };
        actions::update_account(&self.api, &mut fx, update).await;
        self.busy = false;
        self.drain_navigation().await;
    }

    async fn drain_navigation(&mut self) {
        while !self.nav.pending.is_empty() {
            let route = self.nav.pending.remove(0);
            self.goto(route).await;
        }
    }

    fn active_login_field_mut(&mut self) -> &mut String {
        match self.login.focus {
            LoginField::Email => &mut self.login.email,
            LoginField::Password => &mut self.login.password,
        }
    }

    fn active_account_field_mut(&mut self) -> &mut String {
        match self.account_form.focus {
            AccountField::FirstName => &mut self.account_form.first_name,
            AccountField::LastName => &mut self.account_form.last_name,
            AccountField::Email => &mut self.account_form.email,
        }
    }

    fn current_map_accounts_len(&self) -> Option<usize> {
        let id = self.current_map.as_deref()?;
        Some(self.store.state().money_maps.get(id)?.accounts.len())
    }
}

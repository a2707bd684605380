use serde::{Deserialize, Serialize};
use tracing::{error, info};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::error::AuthError;
use crate::models::{Account, User};
use crate::storage::LocalStorage;

// Ключ снапшота в локальном хранилище
const STORAGE_KEY: &str = "auth-storage";

// Стоимость хеширования для предзаполненных тестовых аккаунтов.
// Для регистрации используется DEFAULT_COST.
const SEED_COST: u32 = 4;

// Персистентная часть состояния авторизации. Пользователь попадает
// в снапшот только при включенном "запомнить меня".
#[derive(Debug, Default, Serialize, Deserialize)]
struct AuthSnapshot {
    user: Option<User>,
    remember_me: bool,
}

/// Форма регистрации
#[derive(Debug, Clone, Validate)]
pub struct SignupForm {
    #[validate(email(message = "Некорректный формат email"))]
    pub email: String,
    #[validate(
        length(min = 8, message = "Пароль должен быть не короче 8 символов"),
        custom(function = password_strength)
    )]
    pub password: String,
    pub password_confirm: String,
    #[validate(length(min = 1, message = "Укажите имя"))]
    pub name: String,
}

// Пароль обязан содержать букву, цифру и спецсимвол
fn password_strength(password: &str) -> Result<(), ValidationError> {
    let has_letter = password.chars().any(|c| c.is_ascii_alphabetic());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(|c| "@$!%*#?&".contains(c));
    if has_letter && has_digit && has_special {
        Ok(())
    } else {
        Err(ValidationError::new("password_strength"))
    }
}

/// Частичное обновление профиля
#[derive(Debug, Clone, Default)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub avatar: Option<String>,
}

// Контейнер состояния авторизации. Передается явно, не синглтон.
pub struct AuthStore {
    storage: LocalStorage,
    accounts: Vec<Account>,
    user: Option<User>,
    remember_me: bool,
}

impl AuthStore {
    pub fn load(storage: LocalStorage) -> Self {
        let snapshot = match storage.get::<AuthSnapshot>(STORAGE_KEY) {
            Ok(Some(snapshot)) => snapshot,
            Ok(None) => AuthSnapshot::default(),
            Err(e) => {
                tracing::warn!("Auth snapshot unreadable, starting signed out: {}", e);
                AuthSnapshot::default()
            }
        };

        AuthStore {
            storage,
            accounts: Self::seed_accounts(),
            user: snapshot.user,
            remember_me: snapshot.remember_me,
        }
    }

    // Предзаполненные аккаунты (тестовые данные)
    fn seed_accounts() -> Vec<Account> {
        let seed = [
            (
                "1",
                "alice5855@naver.com",
                "alice5855",
                "Kim Hyejun",
                Some("https://picsum.photos/200/300"),
            ),
            (
                "2",
                "admin@moviebox.com",
                "admin1234",
                "Administrator",
                Some("https://api.dicebear.com/7.x/avataaars/svg?seed=admin"),
            ),
            (
                "3",
                "user@test.com",
                "123456",
                "Hong Gildong",
                Some("https://api.dicebear.com/7.x/avataaars/svg?seed=user"),
            ),
        ];

        seed.into_iter()
            .map(|(id, email, password, name, avatar)| Account {
                user: User {
                    id: id.to_string(),
                    email: email.to_string(),
                    name: name.to_string(),
                    avatar: avatar.map(str::to_string),
                },
                password_hash: bcrypt::hash(password, SEED_COST)
                    .expect("Failed to hash seed password"),
            })
            .collect()
    }

    /// Вход по email и паролю. При включенном `remember_me`
    /// сессия переживает перезапуск.
    pub fn login(
        &mut self,
        email: &str,
        password: &str,
        remember_me: bool,
    ) -> Result<User, AuthError> {
        let account = self
            .accounts
            .iter()
            .find(|a| a.user.email == email)
            .ok_or(AuthError::InvalidCredentials)?;

        if !account.verify_password(password) {
            return Err(AuthError::InvalidCredentials);
        }

        let user = account.user.clone();
        info!("User {} logged in", user.email);

        self.user = Some(user.clone());
        self.remember_me = remember_me;
        self.persist();
        Ok(user)
    }

    /// Регистрация нового аккаунта. Не выполняет вход автоматически.
    pub fn signup(&mut self, form: &SignupForm) -> Result<User, AuthError> {
        form.validate()?;
        if form.password != form.password_confirm {
            return Err(AuthError::PasswordMismatch);
        }
        if self.accounts.iter().any(|a| a.user.email == form.email) {
            return Err(AuthError::EmailTaken);
        }

        let user = User {
            id: format!("user-{}", Uuid::new_v4()),
            email: form.email.clone(),
            name: form.name.clone(),
            avatar: None,
        };
        let password_hash = bcrypt::hash(&form.password, bcrypt::DEFAULT_COST)?;

        info!("User {} signed up", user.email);
        self.accounts.push(Account {
            user: user.clone(),
            password_hash,
        });
        Ok(user)
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            info!("User {} logged out", user.email);
        }
        self.remember_me = false;
        self.persist();
    }

    /// Частичное обновление профиля текущего пользователя
    pub fn update_user(&mut self, update: UserUpdate) -> Result<User, AuthError> {
        let user = self.user.as_mut().ok_or(AuthError::NotAuthenticated)?;

        if let Some(name) = update.name {
            user.name = name;
        }
        if let Some(email) = update.email {
            user.email = email;
        }
        if let Some(avatar) = update.avatar {
            user.avatar = Some(avatar);
        }

        let user = user.clone();
        // Синхронизируем и учетную запись, чтобы вход работал по новому email
        if let Some(account) = self.accounts.iter_mut().find(|a| a.user.id == user.id) {
            account.user = user.clone();
        }
        self.persist();
        Ok(user)
    }

    pub fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    fn persist(&self) {
        let snapshot = AuthSnapshot {
            // Без "запомнить меня" пользователь не попадает в снапшот
            user: if self.remember_me {
                self.user.clone()
            } else {
                None
            },
            remember_me: self.remember_me,
        };
        if let Err(e) = self.storage.set(STORAGE_KEY, &snapshot) {
            error!("Failed to persist auth state: {}", e);
        }
    }
}

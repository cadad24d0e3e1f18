use std::collections::BTreeSet;
use std::sync::{Arc, Mutex};

use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::domain::{
    associate::{
        entities::{Associate, ProjectAssociate},
        ports::AssociateRepository,
        value_objects::{AssociateLinkInput, NewProjectAssociate},
    },
    authentication::{
        entities::{ProjectAccessClaims, SessionClaims},
        ports::TokenIssuer,
        value_objects::Identity,
    },
    common::{
        entities::app_errors::CoreError,
        pagination::PageRequest,
        services::{Service, ServiceSettings},
    },
    crypto::ports::HasherRepository,
    health::{entities::DatabaseHealthStatus, ports::HealthCheckRepository},
    notification::{entities::TemplateMessage, ports::Notifier},
    project::{entities::Project, ports::ProjectRepository},
    property::{
        entities::{Property, PropertyStatus},
        ports::PropertyRepository,
        value_objects::{OrderDirection, PropertyFilter, PropertyInput},
    },
    request::{entities::Request, ports::RequestRepository, value_objects::RequestFilter},
    storage::{entities::StoredFile, ports::MediaStorage, value_objects::MediaArea},
    user::{
        entities::{Role, User, UserCredentials},
        ports::UserRepository,
    },
};

pub type TestService<H = PlainHasher, T = JsonTokenIssuer> = Service<
    InMemoryPropertyRepository,
    InMemoryProjectRepository,
    InMemoryAssociateRepository,
    InMemoryRequestRepository,
    InMemoryUserRepository,
    H,
    T,
    StaticHealthCheck,
    InMemoryMediaStorage,
    RecordingNotifier,
>;

pub fn test_service() -> TestService {
    test_service_with(PlainHasher, JsonTokenIssuer)
}

pub fn test_service_with<H, T>(hasher: H, token_issuer: T) -> TestService<H, T>
where
    H: HasherRepository,
    T: TokenIssuer,
{
    let associate_repository = Arc::new(InMemoryAssociateRepository::default());

    Service {
        property_repository: Arc::new(InMemoryPropertyRepository::default()),
        project_repository: Arc::new(InMemoryProjectRepository {
            projects: Mutex::new(Vec::new()),
            associates: Arc::clone(&associate_repository),
        }),
        associate_repository,
        request_repository: Arc::new(InMemoryRequestRepository::default()),
        user_repository: Arc::new(InMemoryUserRepository::default()),
        hasher_repository: Arc::new(hasher),
        token_issuer: Arc::new(token_issuer),
        health_check_repository: Arc::new(StaticHealthCheck),
        media_storage: Arc::new(InMemoryMediaStorage::default()),
        notifier: Arc::new(RecordingNotifier::default()),
        settings: ServiceSettings {
            session_ttl_hours: 24,
            notification_phone: Some("5218110000000".to_string()),
        },
    }
}

pub fn identity(role: Role) -> Identity {
    Identity {
        id: Uuid::new_v4(),
        username: format!("{role}-test"),
        fullname: "Test Agent".to_string(),
        role,
    }
}

pub fn property_input(contract: &str, price: f64, city: &str) -> PropertyInput {
    PropertyInput {
        address: "Calle Hidalgo 45".to_string(),
        description: "Departamento con balcón".to_string(),
        city: city.to_string(),
        state: "Nuevo León".to_string(),
        zip: "64000".to_string(),
        nb_hood: "Obispado".to_string(),
        country: "México".to_string(),
        price,
        property_type: "departamento".to_string(),
        contract: contract.to_string(),
        beds: 2,
        baths: 1,
        square_mt: 90.0,
        lot_size: 0.0,
        year_built: 2018,
        status: PropertyStatus::Published,
        lat: 25.68,
        lon: -100.35,
        features: serde_json::json!({}),
        featured: false,
        featured_expires_at: None,
    }
}

#[derive(Default)]
pub struct InMemoryPropertyRepository {
    pub rows: Mutex<Vec<Property>>,
}

impl InMemoryPropertyRepository {
    pub fn seed(&self, properties: Vec<Property>) {
        self.rows.lock().unwrap().extend(properties);
    }

    fn matching(&self, filter: &PropertyFilter) -> Vec<Property> {
        let mut rows: Vec<Property> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|p| filter.ids.is_empty() || filter.ids.contains(&p.id))
            .filter(|p| filter.contract.as_ref().is_none_or(|c| &p.contract == c))
            .filter(|p| filter.min_price.is_none_or(|min| p.price >= min))
            .filter(|p| filter.max_price.is_none_or(|max| p.price <= max))
            .filter(|p| filter.beds.is_none_or(|beds| p.beds >= beds))
            .filter(|p| filter.city.as_ref().is_none_or(|c| &p.city == c))
            .filter(|p| filter.status.is_none_or(|s| p.status == s))
            .filter(|p| filter.featured.is_none_or(|f| p.featured == f))
            .cloned()
            .collect();

        rows.sort_by(|a, b| b.listing_date.cmp(&a.listing_date).then(a.id.cmp(&b.id)));
        if filter.order_direction == OrderDirection::Asc {
            rows.reverse();
        }
        rows
    }
}

impl PropertyRepository for InMemoryPropertyRepository {
    async fn count(&self, filter: PropertyFilter) -> Result<u64, CoreError> {
        Ok(self.matching(&filter).len() as u64)
    }

    async fn find_page(
        &self,
        filter: PropertyFilter,
        page: PageRequest,
    ) -> Result<Vec<Property>, CoreError> {
        Ok(self
            .matching(&filter)
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect())
    }

    async fn find_featured(&self, limit: u64) -> Result<Vec<Property>, CoreError> {
        let filter = PropertyFilter {
            featured: Some(true),
            ..Default::default()
        };
        Ok(self.matching(&filter).into_iter().take(limit as usize).collect())
    }

    async fn get_by_id(&self, property_id: Uuid) -> Result<Option<Property>, CoreError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == property_id)
            .cloned())
    }

    async fn get_by_slug(&self, slug: String) -> Result<Option<Property>, CoreError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.slug == slug)
            .cloned())
    }

    async fn find_nearby(
        &self,
        origin: Property,
        _radius_meters: f64,
        limit: u64,
    ) -> Result<Vec<Property>, CoreError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.contract == origin.contract && p.id != origin.id)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn create_property(&self, property: Property) -> Result<Property, CoreError> {
        self.rows.lock().unwrap().push(property.clone());
        Ok(property)
    }

    async fn update_property(&self, property: Property) -> Result<Property, CoreError> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|p| p.id == property.id)
            .ok_or(CoreError::NotFound)?;
        *row = property.clone();
        Ok(property)
    }

    async fn delete_property(&self, property_id: Uuid) -> Result<(), CoreError> {
        self.rows.lock().unwrap().retain(|p| p.id != property_id);
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryAssociateRepository {
    pub rows: Mutex<Vec<Associate>>,
}

impl InMemoryAssociateRepository {
    fn find(&self, associate_id: Uuid) -> Option<Associate> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.id == associate_id)
            .cloned()
    }
}

impl AssociateRepository for InMemoryAssociateRepository {
    async fn get_by_id(&self, associate_id: Uuid) -> Result<Option<Associate>, CoreError> {
        Ok(self.find(associate_id))
    }

    async fn create_associate(&self, associate: Associate) -> Result<Associate, CoreError> {
        self.rows.lock().unwrap().push(associate.clone());
        Ok(associate)
    }

    async fn update_associate(&self, associate: Associate) -> Result<Associate, CoreError> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|a| a.id == associate.id)
            .ok_or(CoreError::NotFound)?;
        *row = associate.clone();
        Ok(associate)
    }

    async fn delete_associate(&self, associate_id: Uuid) -> Result<(), CoreError> {
        self.rows.lock().unwrap().retain(|a| a.id != associate_id);
        Ok(())
    }
}

/// Keeps links inside each project's `associates` list.
pub struct InMemoryProjectRepository {
    pub projects: Mutex<Vec<Project>>,
    pub associates: Arc<InMemoryAssociateRepository>,
}

impl InMemoryProjectRepository {
    fn with_project<R>(
        &self,
        project_id: Uuid,
        f: impl FnOnce(&mut Project) -> Result<R, CoreError>,
    ) -> Result<R, CoreError> {
        let mut projects = self.projects.lock().unwrap();
        let project = projects
            .iter_mut()
            .find(|p| p.id == project_id)
            .ok_or(CoreError::NotFound)?;
        f(project)
    }
}

impl ProjectRepository for InMemoryProjectRepository {
    async fn list_projects(&self) -> Result<Vec<Project>, CoreError> {
        Ok(self.projects.lock().unwrap().clone())
    }

    async fn get_by_id(&self, project_id: Uuid) -> Result<Option<Project>, CoreError> {
        Ok(self
            .projects
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == project_id)
            .cloned())
    }

    async fn get_by_slug(&self, slug: String) -> Result<Option<Project>, CoreError> {
        Ok(self
            .projects
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.slug == slug)
            .cloned())
    }

    async fn create_project(
        &self,
        mut project: Project,
        associates: Vec<NewProjectAssociate>,
    ) -> Result<Project, CoreError> {
        let mut created = Vec::new();
        for new in associates {
            let associate = Associate::new(new.associate)?;
            created.push((associate, new.link));
        }

        for (associate, link) in created {
            self.associates.rows.lock().unwrap().push(associate.clone());
            project.associates.push(ProjectAssociate::new(
                associate,
                link.lot_num,
                link.apple_num,
                link.pending_payment,
            ));
        }

        self.projects.lock().unwrap().push(project.clone());
        Ok(project)
    }

    async fn update_project(&self, project: Project) -> Result<Project, CoreError> {
        self.with_project(project.id, |row| {
            let associates = std::mem::take(&mut row.associates);
            *row = project.clone();
            row.associates = associates;
            Ok(row.clone())
        })
    }

    async fn delete_project(&self, project_id: Uuid) -> Result<(), CoreError> {
        self.projects.lock().unwrap().retain(|p| p.id != project_id);
        Ok(())
    }

    async fn add_associate(
        &self,
        project_id: Uuid,
        associate_id: Uuid,
        link: AssociateLinkInput,
    ) -> Result<(), CoreError> {
        let associate = self.associates.find(associate_id).ok_or(CoreError::NotFound)?;
        self.with_project(project_id, |project| {
            project.associates.push(ProjectAssociate::new(
                associate,
                link.lot_num,
                link.apple_num,
                link.pending_payment,
            ));
            Ok(())
        })
    }

    async fn update_associate_payment(
        &self,
        project_id: Uuid,
        associate_id: Uuid,
        pending_payment: bool,
    ) -> Result<(), CoreError> {
        self.with_project(project_id, |project| {
            let link = project
                .associates
                .iter_mut()
                .find(|a| a.id == associate_id)
                .ok_or(CoreError::NotFound)?;
            link.pending_payment = pending_payment;
            Ok(())
        })
    }

    async fn remove_associate(&self, project_id: Uuid, associate_id: Uuid) -> Result<(), CoreError> {
        self.with_project(project_id, |project| {
            project.associates.retain(|a| a.id != associate_id);
            Ok(())
        })
    }

    async fn find_associate_access(
        &self,
        project_id: Uuid,
        id_code: String,
        lot_num: String,
        apple_num: String,
    ) -> Result<Option<ProjectAssociate>, CoreError> {
        Ok(self
            .projects
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.id == project_id)
            .flat_map(|p| p.associates.iter())
            .find(|a| {
                (a.rfc == id_code || a.curp == id_code)
                    && a.lot_num == lot_num
                    && a.apple_num == apple_num
            })
            .cloned())
    }
}

#[derive(Default)]
pub struct InMemoryRequestRepository {
    pub rows: Mutex<Vec<Request>>,
}

impl InMemoryRequestRepository {
    fn matching(&self, filter: &RequestFilter) -> Vec<Request> {
        let mut rows: Vec<Request> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|r| filter.request_type.is_none_or(|t| r.request_type == t))
            .filter(|r| filter.status.is_none_or(|s| r.status == s))
            .filter(|r| filter.property.is_none_or(|p| r.property == Some(p)))
            .filter(|r| filter.agent.is_none_or(|a| r.agent == Some(a)))
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        rows
    }
}

impl RequestRepository for InMemoryRequestRepository {
    async fn create_request(&self, request: Request) -> Result<Request, CoreError> {
        self.rows.lock().unwrap().push(request.clone());
        Ok(request)
    }

    async fn get_by_id(&self, request_id: Uuid) -> Result<Option<Request>, CoreError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == request_id)
            .cloned())
    }

    async fn update_request(&self, request: Request) -> Result<Request, CoreError> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|r| r.id == request.id)
            .ok_or(CoreError::NotFound)?;
        *row = request.clone();
        Ok(request)
    }

    async fn count(&self, filter: RequestFilter) -> Result<u64, CoreError> {
        Ok(self.matching(&filter).len() as u64)
    }

    async fn find_page(
        &self,
        filter: RequestFilter,
        page: PageRequest,
    ) -> Result<Vec<Request>, CoreError> {
        Ok(self
            .matching(&filter)
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect())
    }
}

#[derive(Default)]
pub struct InMemoryUserRepository {
    pub rows: Mutex<Vec<UserCredentials>>,
}

impl InMemoryUserRepository {
    pub fn seed(&self, user: User, password_hash: &str) {
        self.rows.lock().unwrap().push(UserCredentials {
            user,
            password_hash: password_hash.to_string(),
        });
    }

    fn with_user<R>(
        &self,
        user_id: Uuid,
        f: impl FnOnce(&mut UserCredentials) -> R,
    ) -> Result<R, CoreError> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|c| c.user.id == user_id)
            .ok_or(CoreError::NotFound)?;
        Ok(f(row))
    }
}

impl UserRepository for InMemoryUserRepository {
    async fn get_by_id(&self, user_id: Uuid) -> Result<Option<User>, CoreError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.user.id == user_id)
            .map(|c| c.user.clone()))
    }

    async fn get_by_email(&self, email: String) -> Result<Option<User>, CoreError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.user.email == email)
            .map(|c| c.user.clone()))
    }

    async fn get_credentials(&self, login: String) -> Result<Option<UserCredentials>, CoreError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .find(|c| c.user.username == login)
            .or_else(|| rows.iter().find(|c| c.user.email == login))
            .cloned())
    }

    async fn get_password_hash(&self, user_id: Uuid) -> Result<Option<String>, CoreError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.user.id == user_id)
            .map(|c| c.password_hash.clone()))
    }

    async fn create_user(&self, user: User, password_hash: String) -> Result<User, CoreError> {
        let mut rows = self.rows.lock().unwrap();
        if rows
            .iter()
            .any(|c| c.user.username == user.username || c.user.email == user.email)
        {
            return Err(CoreError::Conflict("username or email already in use".to_string()));
        }
        rows.push(UserCredentials {
            user: user.clone(),
            password_hash,
        });
        Ok(user)
    }

    async fn update_user(&self, user: User) -> Result<User, CoreError> {
        self.with_user(user.id, |row| {
            row.user = user.clone();
            user
        })
    }

    async fn update_password(&self, user_id: Uuid, password_hash: String) -> Result<(), CoreError> {
        self.with_user(user_id, |row| row.password_hash = password_hash)
    }

    async fn update_picture(&self, user_id: Uuid, img: Option<String>) -> Result<User, CoreError> {
        self.with_user(user_id, |row| {
            row.user.img = img;
            row.user.clone()
        })
    }
}

pub struct StaticHealthCheck;

impl HealthCheckRepository for StaticHealthCheck {
    async fn readiness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        Ok(DatabaseHealthStatus::up(1))
    }
}

/// Records paths instead of writing files.
#[derive(Default)]
pub struct InMemoryMediaStorage {
    pub files: Mutex<BTreeSet<(String, String)>>,
    pub dirs: Mutex<BTreeSet<(String, String)>>,
}

impl InMemoryMediaStorage {
    fn key(area: MediaArea, path: &str) -> (String, String) {
        (format!("{area:?}"), path.to_string())
    }

    pub fn contains(&self, area: MediaArea, path: &str) -> bool {
        self.files.lock().unwrap().contains(&Self::key(area, path))
    }

    pub fn has_dir(&self, area: MediaArea, path: &str) -> bool {
        self.dirs.lock().unwrap().contains(&Self::key(area, path))
    }

    pub fn file_count(&self) -> usize {
        self.files.lock().unwrap().len()
    }
}

impl MediaStorage for InMemoryMediaStorage {
    async fn put(
        &self,
        area: MediaArea,
        path: &str,
        payload: bytes::Bytes,
    ) -> Result<StoredFile, CoreError> {
        self.files.lock().unwrap().insert(Self::key(area, path));
        Ok(StoredFile {
            path: path.to_string(),
            size: payload.len() as u64,
        })
    }

    async fn delete(&self, area: MediaArea, path: &str) -> Result<(), CoreError> {
        self.files.lock().unwrap().remove(&Self::key(area, path));
        Ok(())
    }

    async fn create_dir(&self, area: MediaArea, path: &str) -> Result<(), CoreError> {
        self.dirs.lock().unwrap().insert(Self::key(area, path));
        Ok(())
    }

    async fn remove_dir(&self, area: MediaArea, path: &str) -> Result<(), CoreError> {
        self.dirs.lock().unwrap().remove(&Self::key(area, path));
        let prefix = format!("{path}/");
        self.files
            .lock()
            .unwrap()
            .retain(|(a, p)| a != &format!("{area:?}") || !p.starts_with(&prefix));
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub sent: Mutex<Vec<(String, TemplateMessage)>>,
    pub fail: Mutex<bool>,
}

impl Notifier for RecordingNotifier {
    async fn send_template(&self, to: String, message: TemplateMessage) -> Result<(), CoreError> {
        if *self.fail.lock().unwrap() {
            return Err(CoreError::ExternalServiceError("status 500".to_string()));
        }
        self.sent.lock().unwrap().push((to, message));
        Ok(())
    }
}

pub struct PlainHasher;

impl HasherRepository for PlainHasher {
    fn hash_password(&self, password: &str) -> Result<String, CoreError> {
        Ok(format!("hashed:{password}"))
    }

    fn verify_password(&self, password: &str, hash: &str) -> Result<bool, CoreError> {
        Ok(hash == format!("hashed:{password}"))
    }
}

/// Tokens are the claims as JSON, rejected once expired.
pub struct JsonTokenIssuer;

impl TokenIssuer for JsonTokenIssuer {
    fn sign_session(&self, claims: &SessionClaims) -> Result<String, CoreError> {
        serde_json::to_string(claims).map_err(|_| CoreError::InternalServerError)
    }

    fn verify_session(&self, token: &str) -> Result<SessionClaims, CoreError> {
        let claims: SessionClaims =
            serde_json::from_str(token).map_err(|_| CoreError::Unauthorized)?;
        if claims.exp < Utc::now().timestamp() {
            return Err(CoreError::Unauthorized);
        }
        Ok(claims)
    }

    fn sign_project_access(&self, claims: &ProjectAccessClaims) -> Result<String, CoreError> {
        serde_json::to_string(claims).map_err(|_| CoreError::InternalServerError)
    }

    fn verify_project_access(&self, token: &str) -> Result<ProjectAccessClaims, CoreError> {
        let claims: ProjectAccessClaims =
            serde_json::from_str(token).map_err(|_| CoreError::Unauthorized)?;
        if claims.exp < Utc::now().timestamp() {
            return Err(CoreError::Unauthorized);
        }
        Ok(claims)
    }
}

/// A listing dated `minutes_ago` so ordering by listing date is predictable.
pub fn listing(agent: Uuid, input: PropertyInput, minutes_ago: i64) -> Property {
    let mut property = Property::new(agent, input);
    property.listing_date = Utc::now() - Duration::minutes(minutes_ago);
    property
}

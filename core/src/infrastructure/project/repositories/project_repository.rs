use std::sync::Arc;

use sea_orm::{
    ActiveValue::Set, ColumnTrait, Condition, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, SqlErr, TransactionTrait,
};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    associate::{
        entities::{Associate, ProjectAssociate},
        value_objects::{AssociateLinkInput, NewProjectAssociate},
    },
    common::entities::app_errors::CoreError,
    project::{entities::Project, ports::ProjectRepository},
};
use crate::entity::{
    associates::{
        ActiveModel as AssociateActiveModel, Column as AssociateColumn, Entity as AssociateEntity,
    },
    project_associates::{
        ActiveModel as ProjectAssociateActiveModel, Column as ProjectAssociateColumn,
        Entity as ProjectAssociateEntity,
    },
    projects::{ActiveModel as ProjectActiveModel, Column as ProjectColumn, Entity as ProjectEntity},
};
use crate::infrastructure::associate::mappers::project_associate;

fn internal(action: &str, e: DbErr) -> CoreError {
    error!("Failed to {}: {}", action, e);
    CoreError::InternalServerError
}

fn link_model(
    project_id: Uuid,
    associate_id: Uuid,
    link: AssociateLinkInput,
) -> ProjectAssociateActiveModel {
    ProjectAssociateActiveModel {
        project_id: Set(project_id),
        associate_id: Set(associate_id),
        pending_payment: Set(link.pending_payment),
        lot_num: Set(link.lot_num),
        apple_num: Set(link.apple_num),
    }
}

#[derive(Debug)]
pub struct PostgresProjectRepository {
    pub db: Arc<DatabaseConnection>,
}

impl PostgresProjectRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn load_associates(&self, project_id: Uuid) -> Result<Vec<ProjectAssociate>, CoreError> {
        let rows = ProjectAssociateEntity::find()
            .filter(ProjectAssociateColumn::ProjectId.eq(project_id))
            .find_also_related(AssociateEntity)
            .order_by_asc(AssociateColumn::Name)
            .all(self.db.as_ref())
            .await
            .map_err(|e| internal("load project associates", e))?;

        Ok(rows
            .into_iter()
            .filter_map(|(link, associate)| associate.map(|a| project_associate(link, a)))
            .collect())
    }

    async fn with_associates(&self, project: Option<Project>) -> Result<Option<Project>, CoreError> {
        match project {
            Some(mut project) => {
                project.associates = self.load_associates(project.id).await?;
                Ok(Some(project))
            }
            None => Ok(None),
        }
    }

    async fn insert_with_associates<C: ConnectionTrait>(
        conn: &C,
        project: &Project,
        associates: Vec<NewProjectAssociate>,
    ) -> Result<Vec<ProjectAssociate>, CoreError> {
        ProjectEntity::insert(ProjectActiveModel::from(project))
            .exec_without_returning(conn)
            .await
            .map_err(|e| match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    CoreError::Conflict(format!("project {} already exists", project.slug))
                }
                _ => internal("create project", e),
            })?;

        let mut linked = Vec::with_capacity(associates.len());
        for new in associates {
            let associate = Associate::new(new.associate)?;

            AssociateEntity::insert(AssociateActiveModel::from(associate.clone()))
                .exec_without_returning(conn)
                .await
                .map_err(|e| internal("create project associate", e))?;

            ProjectAssociateEntity::insert(link_model(project.id, associate.id, new.link.clone()))
                .exec_without_returning(conn)
                .await
                .map_err(|e| internal("link project associate", e))?;

            linked.push(ProjectAssociate::new(
                associate,
                new.link.lot_num,
                new.link.apple_num,
                new.link.pending_payment,
            ));
        }

        Ok(linked)
    }
}

impl ProjectRepository for PostgresProjectRepository {
    async fn list_projects(&self) -> Result<Vec<Project>, CoreError> {
        let projects = ProjectEntity::find()
            .order_by_desc(ProjectColumn::CreatedAt)
            .all(self.db.as_ref())
            .await
            .map_err(|e| internal("list projects", e))?
            .into_iter()
            .map(Project::from)
            .collect::<Vec<Project>>();

        Ok(projects)
    }

    async fn get_by_id(&self, project_id: Uuid) -> Result<Option<Project>, CoreError> {
        let project = ProjectEntity::find_by_id(project_id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| internal("get project by id", e))?
            .map(Project::from);

        self.with_associates(project).await
    }

    async fn get_by_slug(&self, slug: String) -> Result<Option<Project>, CoreError> {
        let project = ProjectEntity::find()
            .filter(ProjectColumn::Slug.eq(slug))
            .one(self.db.as_ref())
            .await
            .map_err(|e| internal("get project by slug", e))?
            .map(Project::from);

        self.with_associates(project).await
    }

    async fn create_project(
        &self,
        mut project: Project,
        associates: Vec<NewProjectAssociate>,
    ) -> Result<Project, CoreError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| internal("begin project transaction", e))?;

        match Self::insert_with_associates(&txn, &project, associates).await {
            Ok(linked) => {
                txn.commit()
                    .await
                    .map_err(|e| internal("commit project transaction", e))?;
                project.associates = linked;
                Ok(project)
            }
            Err(err) => {
                if let Err(e) = txn.rollback().await {
                    error!("Failed to roll back project transaction: {}", e);
                }
                Err(err)
            }
        }
    }

    async fn update_project(&self, project: Project) -> Result<Project, CoreError> {
        let updated = ProjectEntity::update(ProjectActiveModel::from(&project))
            .exec(self.db.as_ref())
            .await
            .map_err(|e| match e {
                DbErr::RecordNotUpdated => CoreError::NotFound,
                e => match e.sql_err() {
                    Some(SqlErr::UniqueConstraintViolation(_)) => {
                        CoreError::Conflict(format!("project {} already exists", project.slug))
                    }
                    _ => internal("update project", e),
                },
            })?;

        Ok(Project {
            associates: project.associates,
            ..Project::from(updated)
        })
    }

    async fn delete_project(&self, project_id: Uuid) -> Result<(), CoreError> {
        let result = ProjectEntity::delete_by_id(project_id)
            .exec(self.db.as_ref())
            .await
            .map_err(|e| internal("delete project", e))?;

        if result.rows_affected == 0 {
            return Err(CoreError::NotFound);
        }

        Ok(())
    }

    async fn add_associate(
        &self,
        project_id: Uuid,
        associate_id: Uuid,
        link: AssociateLinkInput,
    ) -> Result<(), CoreError> {
        ProjectAssociateEntity::insert(link_model(project_id, associate_id, link))
            .exec_without_returning(self.db.as_ref())
            .await
            .map_err(|e| match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    CoreError::Conflict("associate already linked to project".to_string())
                }
                _ => internal("link project associate", e),
            })?;

        Ok(())
    }

    async fn update_associate_payment(
        &self,
        project_id: Uuid,
        associate_id: Uuid,
        pending_payment: bool,
    ) -> Result<(), CoreError> {
        let result = ProjectAssociateEntity::update_many()
            .col_expr(
                ProjectAssociateColumn::PendingPayment,
                sea_orm::sea_query::Expr::value(pending_payment),
            )
            .filter(ProjectAssociateColumn::ProjectId.eq(project_id))
            .filter(ProjectAssociateColumn::AssociateId.eq(associate_id))
            .exec(self.db.as_ref())
            .await
            .map_err(|e| internal("update project associate", e))?;

        if result.rows_affected == 0 {
            return Err(CoreError::NotFound);
        }

        Ok(())
    }

    async fn remove_associate(&self, project_id: Uuid, associate_id: Uuid) -> Result<(), CoreError> {
        let result = ProjectAssociateEntity::delete_many()
            .filter(ProjectAssociateColumn::ProjectId.eq(project_id))
            .filter(ProjectAssociateColumn::AssociateId.eq(associate_id))
            .exec(self.db.as_ref())
            .await
            .map_err(|e| internal("remove project associate", e))?;

        if result.rows_affected == 0 {
            return Err(CoreError::NotFound);
        }

        Ok(())
    }

    async fn find_associate_access(
        &self,
        project_id: Uuid,
        id_code: String,
        lot_num: String,
        apple_num: String,
    ) -> Result<Option<ProjectAssociate>, CoreError> {
        let row = ProjectAssociateEntity::find()
            .filter(ProjectAssociateColumn::ProjectId.eq(project_id))
            .filter(ProjectAssociateColumn::LotNum.eq(lot_num))
            .filter(ProjectAssociateColumn::AppleNum.eq(apple_num))
            .find_also_related(AssociateEntity)
            .filter(
                Condition::any()
                    .add(AssociateColumn::Rfc.eq(id_code.clone()))
                    .add(AssociateColumn::Curp.eq(id_code)),
            )
            .one(self.db.as_ref())
            .await
            .map_err(|e| internal("look up project access", e))?;

        Ok(row.and_then(|(link, associate)| associate.map(|a| project_associate(link, a))))
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, Transaction};

    use super::*;
    use crate::domain::associate::value_objects::AssociateInput;

    fn exec_ok() -> MockExecResult {
        MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }
    }

    fn inserts(log: &[Transaction]) -> usize {
        log.iter()
            .flat_map(|txn| txn.statements())
            .filter(|statement| statement.sql.starts_with("INSERT"))
            .count()
    }

    fn new_associate(rfc: &str) -> NewProjectAssociate {
        NewProjectAssociate {
            associate: AssociateInput {
                name: "Pedro".to_string(),
                phone: "8115556677".to_string(),
                rfc: rfc.to_string(),
                curp: String::new(),
            },
            link: AssociateLinkInput {
                lot_num: "12".to_string(),
                apple_num: "3".to_string(),
                pending_payment: true,
            },
        }
    }

    #[tokio::test]
    async fn test_create_project_runs_in_one_transaction() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([exec_ok(), exec_ok(), exec_ok()])
            .into_connection();
        let repository = PostgresProjectRepository::new(Arc::new(db));

        let project = Project::new("Conquistadores".to_string(), String::new());
        let created = repository
            .create_project(project, vec![new_associate("SAPE800101AA1")])
            .await
            .unwrap();
        assert_eq!(created.associates.len(), 1);
        assert!(created.associates[0].pending_payment);

        let log = Arc::try_unwrap(repository.db)
            .unwrap()
            .into_transaction_log();
        assert_eq!(log.len(), 1);
        assert_eq!(inserts(&log), 3);
    }

    #[tokio::test]
    async fn test_unidentified_associate_rolls_back() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([exec_ok()])
            .into_connection();
        let repository = PostgresProjectRepository::new(Arc::new(db));

        let project = Project::new("Conquistadores".to_string(), String::new());
        let result = repository
            .create_project(project, vec![new_associate("")])
            .await;
        assert_eq!(result, Err(CoreError::MissingAssociateIdentifier));

        let log = Arc::try_unwrap(repository.db)
            .unwrap()
            .into_transaction_log();
        assert!(
            log.iter()
                .flat_map(|txn| txn.statements())
                .all(|statement| !statement.sql.contains(r#"INSERT INTO "associates""#))
        );
    }

    #[tokio::test]
    async fn test_access_lookup_is_scoped_to_project() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<crate::entity::associates::Model>::new()])
            .into_connection();
        let repository = PostgresProjectRepository::new(Arc::new(db));

        let found = repository
            .find_associate_access(
                Uuid::new_v4(),
                "SAPE800101AA1".to_string(),
                "12".to_string(),
                "3".to_string(),
            )
            .await
            .unwrap();
        assert!(found.is_none());

        let log = Arc::try_unwrap(repository.db)
            .unwrap()
            .into_transaction_log();
        let sql = &log[0].statements()[0].sql;
        assert!(sql.contains(
            r#""project_associates"."project_id" = $1 AND "project_associates"."lot_num" = $2 AND "project_associates"."apple_num" = $3 AND ("associates"."rfc" = $4 OR "associates"."curp" = $5)"#
        ));
    }
}

use super::{SeaOrmStorage, db_error};
use crate::entity::prelude::{
    AcademicSessionActiveModel, AcademicSessions, CourseActiveModel, Courses, SubjectActiveModel,
    Subjects,
};
use crate::entity::{academic_sessions, courses, subjects};
use crate::errors::{Result, SchoolHubError};
use crate::models::academics::{
    entities::{AcademicSession, Course, Subject},
    requests::{
        AcademicSessionRequest, CreateSubjectRequest, SubjectListQuery, UpdateSubjectRequest,
    },
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    // ============ 课程 ============

    pub async fn create_course_impl(&self, name: &str) -> Result<Course> {
        let now = chrono::Utc::now().timestamp();

        let model = CourseActiveModel {
            name: Set(name.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(db_error("创建课程失败"))?;

        Ok(result.into_course())
    }

    pub async fn get_course_by_id_impl(&self, id: i64) -> Result<Option<Course>> {
        let result = Courses::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("查询课程失败: {e}")))?;

        Ok(result.map(|m| m.into_course()))
    }

    pub async fn list_courses_impl(&self) -> Result<Vec<Course>> {
        let result = Courses::find()
            .order_by_asc(courses::Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("查询课程列表失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_course()).collect())
    }

    pub async fn update_course_impl(&self, id: i64, name: &str) -> Result<Option<Course>> {
        if self.get_course_by_id_impl(id).await?.is_none() {
            return Ok(None);
        }

        let model = CourseActiveModel {
            id: Set(id),
            name: Set(name.to_string()),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model.update(&self.db).await.map_err(db_error("更新课程失败"))?;

        Ok(Some(result.into_course()))
    }

    pub async fn delete_course_impl(&self, id: i64) -> Result<bool> {
        let result = Courses::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("删除课程失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    // ============ 科目 ============

    pub async fn create_subject_impl(&self, req: CreateSubjectRequest) -> Result<Subject> {
        let now = chrono::Utc::now().timestamp();

        let model = SubjectActiveModel {
            name: Set(req.name),
            staff_id: Set(req.staff_id),
            course_id: Set(req.course_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(db_error("创建科目失败"))?;

        Ok(result.into_subject())
    }

    pub async fn get_subject_by_id_impl(&self, id: i64) -> Result<Option<Subject>> {
        let result = Subjects::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("查询科目失败: {e}")))?;

        Ok(result.map(|m| m.into_subject()))
    }

    pub async fn list_subjects_impl(&self, query: SubjectListQuery) -> Result<Vec<Subject>> {
        let mut select = Subjects::find();

        if let Some(staff_id) = query.staff_id {
            select = select.filter(subjects::Column::StaffId.eq(staff_id));
        }
        if let Some(course_id) = query.course_id {
            select = select.filter(subjects::Column::CourseId.eq(course_id));
        }

        let result = select
            .order_by_asc(subjects::Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("查询科目列表失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_subject()).collect())
    }

    pub async fn update_subject_impl(
        &self,
        id: i64,
        update: UpdateSubjectRequest,
    ) -> Result<Option<Subject>> {
        if self.get_subject_by_id_impl(id).await?.is_none() {
            return Ok(None);
        }

        let mut model = SubjectActiveModel {
            id: Set(id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.name = Set(name);
        }
        if let Some(staff_id) = update.staff_id {
            model.staff_id = Set(staff_id);
        }
        if let Some(course_id) = update.course_id {
            model.course_id = Set(course_id);
        }

        let result = model.update(&self.db).await.map_err(db_error("更新科目失败"))?;

        Ok(Some(result.into_subject()))
    }

    pub async fn delete_subject_impl(&self, id: i64) -> Result<bool> {
        let result = Subjects::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("删除科目失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    // ============ 学年 ============

    pub async fn create_academic_session_impl(
        &self,
        req: AcademicSessionRequest,
    ) -> Result<AcademicSession> {
        let model = AcademicSessionActiveModel {
            start_year: Set(req.start_year),
            end_year: Set(req.end_year),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(db_error("创建学年失败"))?;

        Ok(result.into_academic_session())
    }

    pub async fn get_academic_session_by_id_impl(
        &self,
        id: i64,
    ) -> Result<Option<AcademicSession>> {
        let result = AcademicSessions::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("查询学年失败: {e}")))?;

        Ok(result.map(|m| m.into_academic_session()))
    }

    pub async fn list_academic_sessions_impl(&self) -> Result<Vec<AcademicSession>> {
        let result = AcademicSessions::find()
            .order_by_desc(academic_sessions::Column::StartYear)
            .all(&self.db)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("查询学年列表失败: {e}")))?;

        Ok(result
            .into_iter()
            .map(|m| m.into_academic_session())
            .collect())
    }

    pub async fn update_academic_session_impl(
        &self,
        id: i64,
        req: AcademicSessionRequest,
    ) -> Result<Option<AcademicSession>> {
        if self.get_academic_session_by_id_impl(id).await?.is_none() {
            return Ok(None);
        }

        let model = AcademicSessionActiveModel {
            id: Set(id),
            start_year: Set(req.start_year),
            end_year: Set(req.end_year),
        };

        let result = model.update(&self.db).await.map_err(db_error("更新学年失败"))?;

        Ok(Some(result.into_academic_session()))
    }

    pub async fn delete_academic_session_impl(&self, id: i64) -> Result<bool> {
        let result = AcademicSessions::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("删除学年失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}

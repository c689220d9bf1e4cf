use super::{SeaOrmStorage, db_error};
use crate::entity::prelude::Subjects;
use crate::entity::student_results::{ActiveModel, Column, Entity as StudentResults};
use crate::entity::subjects;
use crate::errors::{Result, SchoolHubError};
use crate::models::results::{
    entities::StudentResult, requests::SaveResultRequest, responses::MyResultEntry,
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 按 (学生, 科目) 写入成绩，返回是否为新建
    pub async fn upsert_result_impl(
        &self,
        req: SaveResultRequest,
    ) -> Result<(StudentResult, bool)> {
        let now = chrono::Utc::now().timestamp();

        let existing = StudentResults::find()
            .filter(Column::StudentId.eq(req.student_id))
            .filter(Column::SubjectId.eq(req.subject_id))
            .one(&self.db)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("查询成绩失败: {e}")))?;

        match existing {
            Some(model) => {
                let mut model: ActiveModel = model.into();
                model.test = Set(req.test);
                model.exam = Set(req.exam);
                model.updated_at = Set(now);

                let result = model.update(&self.db).await.map_err(db_error("更新成绩失败"))?;
                Ok((result.into_student_result(), false))
            }
            None => {
                let model = ActiveModel {
                    student_id: Set(req.student_id),
                    subject_id: Set(req.subject_id),
                    test: Set(req.test),
                    exam: Set(req.exam),
                    created_at: Set(now),
                    updated_at: Set(now),
                    ..Default::default()
                };

                let result = model.insert(&self.db).await.map_err(db_error("保存成绩失败"))?;
                Ok((result.into_student_result(), true))
            }
        }
    }

    pub async fn get_result_impl(
        &self,
        student_id: i64,
        subject_id: i64,
    ) -> Result<Option<StudentResult>> {
        let result = StudentResults::find()
            .filter(Column::StudentId.eq(student_id))
            .filter(Column::SubjectId.eq(subject_id))
            .one(&self.db)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("查询成绩失败: {e}")))?;

        Ok(result.map(|m| m.into_student_result()))
    }

    /// 学生的全部成绩，附科目名称
    pub async fn list_results_by_student_impl(
        &self,
        student_id: i64,
    ) -> Result<Vec<MyResultEntry>> {
        let rows = StudentResults::find()
            .filter(Column::StudentId.eq(student_id))
            .find_also_related(Subjects)
            .order_by_asc(subjects::Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("查询成绩列表失败: {e}")))?;

        Ok(rows
            .into_iter()
            .filter_map(|(result, subject)| {
                subject.map(|s| MyResultEntry {
                    subject_id: s.id,
                    subject_name: s.name,
                    test: result.test,
                    exam: result.exam,
                    total: result.test + result.exam,
                })
            })
            .collect())
    }
}

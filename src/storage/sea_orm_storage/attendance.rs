use std::collections::{HashMap, HashSet};

use super::{SeaOrmStorage, db_error};
use crate::entity::prelude::{
    AttendanceActiveModel, AttendanceReportActiveModel, AttendanceReports, Attendances, Students,
    Users,
};
use crate::entity::{attendance_reports, attendances, students, users};
use crate::errors::{Result, SchoolHubError};
use crate::models::attendance::{
    entities::Attendance,
    requests::AttendanceMark,
    responses::{AttendanceReportEntry, MyAttendanceEntry, RosterEntry, SaveAttendanceResponse},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, JoinType, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, Set, TransactionTrait,
};

/// 名单显示用的 "姓 名"
fn roster_name(user: &users::Model) -> String {
    format!("{} {}", user.last_name, user.first_name)
}

impl SeaOrmStorage {
    /// 学生档案ID -> (用户ID, 姓名)
    pub(super) async fn load_student_names(
        &self,
        student_ids: Vec<i64>,
    ) -> Result<HashMap<i64, (i64, String)>> {
        if student_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = Students::find()
            .filter(students::Column::Id.is_in(student_ids))
            .find_also_related(Users)
            .all(&self.db)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("查询学生信息失败: {e}")))?;

        Ok(rows
            .into_iter()
            .filter_map(|(student, user)| {
                user.map(|u| (student.id, (u.id, roster_name(&u))))
            })
            .collect())
    }

    /// 课程与学年匹配的学生名单
    pub async fn list_roster_impl(
        &self,
        course_id: i64,
        session_id: i64,
    ) -> Result<Vec<RosterEntry>> {
        let rows = Students::find()
            .filter(students::Column::CourseId.eq(course_id))
            .filter(students::Column::SessionId.eq(session_id))
            .find_also_related(Users)
            .order_by_asc(users::Column::LastName)
            .order_by_asc(users::Column::FirstName)
            .all(&self.db)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("查询学生名单失败: {e}")))?;

        Ok(rows
            .into_iter()
            .filter_map(|(student, user)| {
                user.map(|u| RosterEntry {
                    id: student.id,
                    name: roster_name(&u),
                })
            })
            .collect())
    }

    /// 保存考勤：考勤日与记录均为取或建，已存在的记录状态保持不变
    pub async fn save_attendance_impl(
        &self,
        subject_id: i64,
        session_id: i64,
        date: chrono::NaiveDate,
        marks: &[AttendanceMark],
    ) -> Result<SaveAttendanceResponse> {
        let now = chrono::Utc::now().timestamp();

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("开启事务失败: {e}")))?;

        let existing = Attendances::find()
            .filter(attendances::Column::SessionId.eq(session_id))
            .filter(attendances::Column::SubjectId.eq(subject_id))
            .filter(attendances::Column::Date.eq(date))
            .one(&txn)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("查询考勤失败: {e}")))?;

        let attendance = match existing {
            Some(a) => a,
            None => AttendanceActiveModel {
                session_id: Set(session_id),
                subject_id: Set(subject_id),
                date: Set(date),
                created_at: Set(now),
                updated_at: Set(now),
                ..Default::default()
            }
            .insert(&txn)
            .await
            .map_err(db_error("创建考勤失败"))?,
        };

        let recorded: Vec<i64> = AttendanceReports::find()
            .filter(attendance_reports::Column::AttendanceId.eq(attendance.id))
            .select_only()
            .column(attendance_reports::Column::StudentId)
            .into_tuple::<i64>()
            .all(&txn)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("查询考勤记录失败: {e}")))?;

        let mut seen: HashSet<i64> = recorded.into_iter().collect();
        let mut created = 0;
        let mut unchanged = 0;

        for mark in marks {
            if !seen.insert(mark.student_id) {
                unchanged += 1;
                continue;
            }

            AttendanceReportActiveModel {
                student_id: Set(mark.student_id),
                attendance_id: Set(attendance.id),
                status: Set(mark.status),
                created_at: Set(now),
                updated_at: Set(now),
                ..Default::default()
            }
            .insert(&txn)
            .await
            .map_err(db_error("创建考勤记录失败"))?;
            created += 1;
        }

        txn.commit()
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(SaveAttendanceResponse {
            attendance_id: attendance.id,
            created,
            unchanged,
        })
    }

    pub async fn list_attendances_impl(
        &self,
        subject_id: i64,
        session_id: i64,
    ) -> Result<Vec<Attendance>> {
        let result = Attendances::find()
            .filter(attendances::Column::SubjectId.eq(subject_id))
            .filter(attendances::Column::SessionId.eq(session_id))
            .order_by_desc(attendances::Column::Date)
            .all(&self.db)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("查询考勤列表失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_attendance()).collect())
    }

    pub async fn get_attendance_by_id_impl(&self, id: i64) -> Result<Option<Attendance>> {
        let result = Attendances::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("查询考勤失败: {e}")))?;

        Ok(result.map(|m| m.into_attendance()))
    }

    /// 某次考勤的全部记录，student_id 为学生的用户ID
    pub async fn list_attendance_reports_impl(
        &self,
        attendance_id: i64,
    ) -> Result<Vec<AttendanceReportEntry>> {
        let reports = AttendanceReports::find()
            .filter(attendance_reports::Column::AttendanceId.eq(attendance_id))
            .order_by_asc(attendance_reports::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("查询考勤记录失败: {e}")))?;

        let student_ids: Vec<i64> = reports.iter().map(|r| r.student_id).collect();
        let names = self.load_student_names(student_ids).await?;

        Ok(reports
            .into_iter()
            .filter_map(|r| {
                names
                    .get(&r.student_id)
                    .map(|(user_id, name)| AttendanceReportEntry {
                        student_id: *user_id,
                        name: name.clone(),
                        status: r.status,
                    })
            })
            .collect())
    }

    /// 覆盖考勤记录状态，任一记录不存在则整体回滚
    pub async fn update_attendance_reports_impl(
        &self,
        attendance_id: i64,
        marks: &[AttendanceMark],
    ) -> Result<usize> {
        let now = chrono::Utc::now().timestamp();

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("开启事务失败: {e}")))?;

        let mut updated = 0;
        for mark in marks {
            let report = AttendanceReports::find()
                .join(
                    JoinType::InnerJoin,
                    attendance_reports::Relation::Student.def(),
                )
                .filter(attendance_reports::Column::AttendanceId.eq(attendance_id))
                .filter(students::Column::UserId.eq(mark.student_id))
                .one(&txn)
                .await
                .map_err(|e| {
                    SchoolHubError::database_operation(format!("查询考勤记录失败: {e}"))
                })?
                .ok_or_else(|| {
                    SchoolHubError::not_found(format!(
                        "学生 {} 没有考勤记录 {attendance_id}",
                        mark.student_id
                    ))
                })?;

            let mut model: AttendanceReportActiveModel = report.into();
            model.status = Set(mark.status);
            model.updated_at = Set(now);
            model
                .update(&txn)
                .await
                .map_err(db_error("更新考勤记录失败"))?;
            updated += 1;
        }

        txn.commit()
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(updated)
    }

    /// 学生在日期区间内（含端点）某科目的考勤
    pub async fn list_student_attendance_impl(
        &self,
        student_id: i64,
        subject_id: i64,
        start: chrono::NaiveDate,
        end: chrono::NaiveDate,
    ) -> Result<Vec<MyAttendanceEntry>> {
        let rows = AttendanceReports::find()
            .filter(attendance_reports::Column::StudentId.eq(student_id))
            .find_also_related(Attendances)
            .filter(attendances::Column::SubjectId.eq(subject_id))
            .filter(attendances::Column::Date.between(start, end))
            .order_by_asc(attendances::Column::Date)
            .all(&self.db)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("查询学生考勤失败: {e}")))?;

        Ok(rows
            .into_iter()
            .filter_map(|(report, attendance)| {
                attendance.map(|a| MyAttendanceEntry {
                    date: a.date,
                    status: report.status,
                })
            })
            .collect())
    }
}

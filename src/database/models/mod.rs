pub mod attendance_status;
pub mod class;
pub mod lesson_log;
pub mod lesson_schedule;
pub mod student;
pub mod student_lesson;
pub mod subject;
pub mod teacher;
pub mod teacher_assignment;

pub use attendance_status::AttendanceStatus;
pub use class::Class;
pub use lesson_log::LessonLog;
pub use lesson_schedule::LessonSchedule;
pub use student::Student;
pub use student_lesson::StudentLesson;
pub use subject::Subject;
pub use teacher::Teacher;
pub use teacher_assignment::TeacherAssignment;

use crate::database::resource::ResourceVisitor;

/// Single registry of resource types. Route registration and schema
/// synchronization both walk this list, in this order.
pub fn visit_all<V: ResourceVisitor>(visitor: &mut V) {
    visitor.visit::<Class>();
    visitor.visit::<Student>();
    visitor.visit::<Teacher>();
    visitor.visit::<Subject>();
    visitor.visit::<TeacherAssignment>();
    visitor.visit::<LessonSchedule>();
    visitor.visit::<LessonLog>();
    visitor.visit::<StudentLesson>();
    visitor.visit::<AttendanceStatus>();
}

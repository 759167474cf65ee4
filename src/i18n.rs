//! Customer-facing copy. The shop serves Thai-speaking customers.

pub const PAGE_TITLE: &str = "นัดหมาย Maintenance";
pub const LOADING: &str = "กำลังโหลด...";
pub const PREFERRED_DATE: &str = "วันที่สะดวก";
pub const FULL: &str = "เต็ม";
pub const CHOOSE_OTHER_DATE: &str = "เลือกวันที่อื่น";
pub const PICKER_PLACEHOLDER: &str = "เลือกวันที่";
pub const PICKER_CONFIRM: &str = "ตกลง";
pub const PICKER_CLOSE: &str = "ปิด";
pub const SUBMIT: &str = "ส่งคำขอ";
pub const SUBMITTING: &str = "กำลังส่ง...";

pub const LABEL_NAME: &str = "ชื่อ";
pub const LABEL_PHONE: &str = "เบอร์โทร";
pub const LABEL_CAR_MODEL: &str = "รุ่นรถ";
pub const LABEL_LICENSE_PLATE: &str = "หมายเลขทะเบียน";
pub const LABEL_STATUS: &str = "สถานะ";

pub const PLACEHOLDER_NAME: &str = "กรอกชื่อ";
pub const PLACEHOLDER_PHONE: &str = "กรอกเบอร์โทร (เช่น 0812345678)";
pub const PLACEHOLDER_CAR_MODEL: &str = "กรอกรุ่นรถ";
pub const PLACEHOLDER_LICENSE_PLATE: &str = "กรอกหมายเลขทะเบียน";

pub const REQUIRED_NAME: &str = "กรุณากรอกชื่อ";
pub const REQUIRED_PHONE: &str = "กรุณากรอกเบอร์โทร";
pub const INVALID_PHONE: &str = "เบอร์โทรต้องมี 10 หลัก เริ่มต้นด้วย 0 และเป็นตัวเลขเท่านั้น";
pub const REQUIRED_CAR_MODEL: &str = "กรุณากรอกรุ่นรถ";
pub const REQUIRED_LICENSE_PLATE: &str = "กรุณากรอกหมายเลขทะเบียน";

pub const CHOOSE_DATE: &str = "กรุณาเลือกวันที่สะดวก";
pub const DATE_FULL: &str = "วันที่นี้เต็มแล้ว กรุณาเลือกวันอื่น";
pub const INVALID_DATE: &str = "รูปแบบวันที่ไม่ถูกต้อง";
pub const NO_AVAILABLE_DATES: &str = "ไม่มีวันว่างในช่วงเวลาที่เปิดรับจอง";
pub const BOOKED_DATES_FAILED: &str = "ไม่สามารถดึงข้อมูลวันที่ที่เต็มได้";
pub const SUBMIT_FAILED_PREFIX: &str = "การส่งคำขอล้มเหลว";
pub const SUBMIT_OK_TITLE: &str = "ส่งคำขอ maintenance เรียบร้อย";
pub const SUBMIT_OK_DETAIL: &str = "กรุณารอการติดต่อกลับจากแอดมิน";

pub const CONFIRMATION_TITLE: &str = "ส่งคำขอสำเร็จ!";
pub const SCREENSHOT_NOTICE: &str = "กรุณาแคปหน้าจอนี้เพื่อใช้เป็นหลักฐาน";
pub const CONTACT_HEADING: &str = "หากมีปัญหา กรุณาติดต่อที่:";
pub const BACK_HOME: &str = "กลับสู่หน้าหลัก";

pub const ADMIN_LOGIN_TITLE: &str = "เข้าสู่ระบบแอดมิน";
pub const ADMIN_USERNAME: &str = "ชื่อผู้ใช้";
pub const ADMIN_PASSWORD: &str = "รหัสผ่าน";
pub const ADMIN_LOGIN: &str = "เข้าสู่ระบบ";
pub const ADMIN_LOGIN_FAILED: &str = "เข้าสู่ระบบไม่สำเร็จ";
pub const ADMIN_LOGIN_REQUIRED: &str = "กรุณากรอกชื่อผู้ใช้และรหัสผ่าน";
pub const ADMIN_DASHBOARD_TITLE: &str = "แดชบอร์ดแอดมิน";
pub const ADMIN_SIGNED_IN: &str = "เข้าสู่ระบบแล้ว";
pub const ADMIN_LOGOUT: &str = "ออกจากระบบ";

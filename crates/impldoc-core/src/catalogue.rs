//! The authored report content
//!
//! Twelve sections walking through the object-oriented concepts used by the
//! LMS mini project. The order is pedagogical: later sections build on
//! earlier ones and must stay where they are.

use impldoc_ast::{CodeBlock, SectionSpec};

/// All sections of the report, in presentation order
pub fn catalogue() -> Vec<SectionSpec> {
    vec![
        classes_and_objects(),
        encapsulation(),
        inheritance(),
        polymorphism(),
        abstraction(),
        constructors(),
        access_modifiers(),
        packages(),
        exception_handling(),
        generics(),
        collections_framework(),
        file_handling(),
    ]
}

fn classes_and_objects() -> SectionSpec {
    SectionSpec::new("1. Classes & Objects")
        .with_explanation(
            "The LMS project contains multiple meaningful classes representing real-world \
            entities. We have User hierarchy classes (Student, Teacher, Admin, Principal), \
            Course class for academic courses, Department and Batch classes for \
            organizational structure, and repository classes for data management.",
        )
        .with_references([
            "User.java",
            "Student.java",
            "Teacher.java",
            "Admin.java",
            "Principal.java",
            "Course.java",
            "Department.java",
            "Batch.java",
            "Assignment.java",
            "Grade.java",
            "Message.java",
            "Attendance.java",
        ])
        .with_excerpt(CodeBlock::labeled(
            "Code Snippet",
            "// Class definition
public class Student extends User {
    private String id;
    private Department dept;
    private Batch batch;
    private List<Course> courses;
    // methods and constructors
}

// Object creation in Main.java
Student student = new Student(3001, \"Charlie Brown\",\x20
    \"charlie@lms.edu\", \"charlie\", \"pass123\");",
        ))
        .with_viva(
            "\"We created classes like Student, Teacher, Course, and Department representing \
            real entities in an LMS, and we create objects of these classes to manage the \
            system.\"",
        )
}

fn encapsulation() -> SectionSpec {
    SectionSpec::new("2. Encapsulation")
        .with_explanation(
            "All fields in our classes are declared as private to protect data. We provide \
            public getter and setter methods to control access. Validation logic is included \
            in setters and constructors to ensure data integrity (e.g., name validation, \
            email format validation, password length check).",
        )
        .with_references([
            "User.java",
            "Student.java",
            "Teacher.java",
            "Course.java",
            "InputValidator.java",
        ])
        .with_excerpt(CodeBlock::labeled(
            "Code Snippet",
            "// Private fields
private int userId;
private String name;
private String email;

// Public getters and setters with validation
public void setName(String name) {
    this.name = name;
}

public String getName() {
    return name;
}

// Validation in constructor
public User(int userId, String name, String email,\x20
            String username, String password)\x20
            throws ValidationException {
    InputValidator.validateAllUserFields(userId, name,\x20
        email, username, password);
    this.userId = userId;
    this.name = name;
    this.email = email;
}",
        ))
        .with_viva(
            "\"We use private fields to hide data and provide public getters/setters to \
            control access, with validation logic to prevent invalid data like empty names \
            or invalid email formats.\"",
        )
}

fn inheritance() -> SectionSpec {
    SectionSpec::new("3. Inheritance")
        .with_explanation(
            "We created an abstract base class User with common properties (userId, name, \
            email, username, password) and methods (login, logout, upload). Four derived \
            classes extend User: Student, Teacher, Admin, and Principal. Each subclass \
            inherits common properties from User and adds its specific fields and behaviors.",
        )
        .with_references([
            "User.java (base class)",
            "Student.java",
            "Teacher.java",
            "Admin.java",
            "Principal.java (derived classes)",
        ])
        .with_excerpt(CodeBlock::labeled(
            "Code Snippet",
            "// Base class
public abstract class User {
    private int userId;
    private String name;
    // common fields and methods
    public abstract String getRole();
}

// Derived class
public class Student extends User {
    private String id;
    private List<Course> courses;
   \x20
    public Student(int userId, String name, String email,\x20
                   String username, String password) {
        super(userId, name, email, username, password);
        this.id = \"S\" + userId;
    }
   \x20
    @Override
    public String getRole() {
        return \"STUDENT\";
    }
}",
        ))
        .with_viva(
            "\"We have a User base class with common properties, and Student, Teacher, Admin, \
            Principal classes inherit from it using the extends keyword, demonstrating IS-A \
            relationship.\"",
        )
}

fn polymorphism() -> SectionSpec {
    SectionSpec::new("4. Polymorphism")
        .with_explanation(
            "Runtime polymorphism is demonstrated through method overriding. The User class \
            has an abstract method getRole() that is overridden by each subclass. \
            Compile-time polymorphism is shown through constructor overloading (default and \
            parameterized constructors). We use dynamic method dispatch where a User \
            reference can point to Student, Teacher, Admin, or Principal objects.",
        )
        .with_references([
            "User.java (abstract method)",
            "Student.java",
            "Teacher.java",
            "Admin.java",
            "Principal.java (overriding)",
            "Main.java (polymorphic calls)",
        ])
        .with_excerpt(CodeBlock::labeled(
            "Code Snippet",
            "// Method Overriding (Runtime Polymorphism)
// In User.java
public abstract String getRole();

// In Student.java
@Override
public String getRole() {
    return \"STUDENT\";
}

// In Teacher.java \x20
@Override
public String getRole() {
    return \"TEACHER\";
}

// Dynamic method dispatch in Main.java
User[] users = {admin, teacher, student, principal};
for (User user : users) {
    System.out.println(\"Role: \" + user.getRole());
    user.login();  // Polymorphic call
}

// Constructor Overloading (Compile-time Polymorphism)
public User() {}  // Default constructor
public User(int userId, String name, String email,\x20
            String username, String password) { }",
        ))
        .with_viva(
            "\"We demonstrate runtime polymorphism by overriding getRole() method in \
            subclasses, and compile-time polymorphism through constructor overloading, \
            allowing the same method name with different behaviors.\"",
        )
}

fn abstraction() -> SectionSpec {
    SectionSpec::new("5. Abstraction")
        .with_explanation(
            "Abstraction is achieved through abstract classes and interfaces. User is an \
            abstract class with abstract method getRole(). We have interfaces like \
            Repository<T>, Searchable<T>, Sortable<T>, and UploadService<T> that define \
            contracts without implementation details. BaseException is another abstract \
            class for custom exceptions.",
        )
        .with_references([
            "User.java (abstract class)",
            "BaseException.java (abstract class)",
            "Repository.java",
            "Searchable.java",
            "Sortable.java",
            "UploadService.java (interfaces)",
        ])
        .with_excerpt(CodeBlock::labeled(
            "Code Snippet",
            "// Abstract Class
public abstract class User {
    private int userId;
    private String name;
   \x20
    public abstract String getRole();  // Abstract method
   \x20
    public void login() {
        System.out.println(\"User logged in\");
    }
}

// Interface
public interface Repository<T> {
    void add(T item) throws RepositoryException;
    void update(T item) throws RepositoryException;
    void delete(T item) throws RepositoryException;
    List<T> getAll() throws RepositoryException;
}

// Interface implementation
public class StudentRepository implements Repository<Student> {
    @Override
    public void add(Student student) {
        students.add(student);
        saveAll();
    }
}",
        ))
        .with_viva(
            "\"We use abstract class User with abstract method getRole(), and interfaces like \
            Repository<T> and Searchable<T> to define contracts, hiding implementation \
            details and exposing only necessary behaviors.\"",
        )
}

fn constructors() -> SectionSpec {
    SectionSpec::new("6. Constructors")
        .with_explanation(
            "Every class has both default (no-arg) and parameterized constructors. \
            Constructor overloading is demonstrated in User, Student, Teacher, and Course \
            classes. Constructor chaining using super() is used in derived classes to call \
            parent constructors.",
        )
        .with_references([
            "User.java",
            "Student.java",
            "Teacher.java",
            "Admin.java",
            "Course.java",
        ])
        .with_excerpt(CodeBlock::labeled(
            "Code Snippet",
            "// Constructor Overloading
// Default constructor
public User() {}

// Parameterized constructor
public User(int userId, String name, String email,\x20
            String username, String password) {
    this.userId = userId;
    this.name = name;
    this.email = email;
}

// Constructor Chaining with super()
public class Student extends User {
    public Student() {
        super();  // Calls parent default constructor
    }
   \x20
    public Student(int userId, String name, String email,
                   String username, String password) {
        super(userId, name, email, username, password);
        this.id = \"S\" + userId;
    }
}

// Course class with multiple constructors
public Course(String courseId, String courseName,\x20
              int creditHours) {
    this.courseId = courseId;
    this.courseName = courseName;
    this.creditHours = creditHours;
}

public Course(String courseId, String courseName,\x20
              int creditHours, String facultyName,
              String classDays, String classTimes) {
    this(courseId, courseName, creditHours);  // this()
    this.facultyName = facultyName;
}",
        ))
        .with_viva(
            "\"We have default and parameterized constructors in all classes, use super() to \
            call parent constructors in child classes, and this() for constructor chaining \
            within the same class.\"",
        )
}

fn access_modifiers() -> SectionSpec {
    SectionSpec::new("7. Access Modifiers")
        .with_explanation(
            "We use all four access modifiers: (1) private for fields in all classes, (2) \
            public for getters, setters, and main methods, (3) protected could be used for \
            package-level access, (4) default (package-private) for some utility methods. \
            This demonstrates how access control works across classes and packages.",
        )
        .with_references([
            "All classes in sms.domain, sms.data, sms.services packages",
        ])
        .with_excerpt(CodeBlock::labeled(
            "Code Snippet",
            r#"// private - accessible only within the class
private int userId;
private String name;

// public - accessible from anywhere
public String getName() {
    return name;
}

public void setName(String name) {
    this.name = name;
}

// protected - accessible in package and subclasses
protected void validateUser() {
    // validation logic
}

// default (no modifier) - package-private
void loadAll() {
    // accessible within same package
}"#,
        ))
        .with_viva(
            "\"We use private for data hiding, public for methods that need external access, \
            protected for subclass access, and default for package-level access.\"",
        )
}

fn packages() -> SectionSpec {
    SectionSpec::new("8. Packages")
        .with_explanation(
            "The project is organized into multiple packages: sms.app (main application), \
            sms.domain (entities), sms.data (repositories), sms.exceptions (custom \
            exceptions), sms.services (business logic), sms.search (search interface), \
            sms.sort (sort interface), sms.validation (input validation). Classes are \
            imported across packages using import statements.",
        )
        .with_references([
            "sms.app",
            "sms.domain",
            "sms.data",
            "sms.exceptions",
            "sms.services",
            "sms.search",
            "sms.sort",
            "sms.validation",
        ])
        .with_excerpt(CodeBlock::labeled(
            "Package Structure",
            r#"src/main/java/sms/
├── app/                 # Main application
│   └── Main.java
├── data/                # Data access layer
│   ├── Repository.java
│   ├── StudentRepository.java
│   ├── TeacherRepository.java
│   └── ...
├── domain/              # Domain entities
│   ├── User.java
│   ├── Student.java
│   ├── Teacher.java
│   ├── Course.java
│   └── ...
├── exceptions/          # Custom exceptions
│   ├── BaseException.java
│   ├── ValidationException.java
│   └── ...
├── services/            # Business logic
│   ├── UploadService.java
│   └── FileUploadService.java
├── search/              # Search interfaces
│   └── Searchable.java
├── sort/                # Sort interfaces
│   └── Sortable.java
└── validation/          # Input validation
    └── InputValidator.java"#,
        ))
        .with_excerpt(CodeBlock::labeled(
            "Import Example",
            r#"package sms.app;

import sms.domain.Student;
import sms.domain.Teacher;
import sms.data.StudentRepository;
import sms.exceptions.ValidationException;
import sms.services.FileUploadService;

public class Main {
    // Use imported classes
}"#,
        ))
        .with_viva(
            "\"We organized code into packages like sms.domain for entities, sms.data for \
            repositories, sms.exceptions for custom exceptions, making the project modular \
            and maintainable.\"",
        )
}

fn exception_handling() -> SectionSpec {
    SectionSpec::new("9. Exception Handling")
        .with_explanation(
            "We created a custom exception hierarchy with BaseException as the abstract \
            parent. Custom exceptions include ValidationException, NotFoundException, \
            RepositoryException, AuthenticationException, AuthorizationException, and \
            UploadException. Try-catch-finally blocks are used throughout the application to \
            handle these exceptions gracefully.",
        )
        .with_references([
            "BaseException.java",
            "ValidationException.java",
            "NotFoundException.java",
            "RepositoryException.java",
            "AuthenticationException.java",
            "AuthorizationException.java",
            "UploadException.java",
            "Main.java (usage)",
        ])
        .with_excerpt(CodeBlock::labeled(
            "Code Snippet",
            "// Custom Exception Hierarchy
public abstract class BaseException extends Exception {
    private String message;
    private LocalDateTime timestamp;
   \x20
    public void log() {
        System.err.println(\"[\" + timestamp + \"] \" +\x20
            this.getClass().getSimpleName() + \": \" + message);
    }
}

public class ValidationException extends BaseException {
    private String fieldName;
    private String invalidValue;
   \x20
    public ValidationException(String message, String fieldName,
                               String invalidValue) {
        super(message);
        this.fieldName = fieldName;
        this.invalidValue = invalidValue;
    }
}

// Try-Catch-Finally usage
try {
    student.login();
    student.upload(file);
} catch (ValidationException e) {
    e.log();
    System.out.println(\"Validation failed\");
} catch (AuthenticationException e) {
    e.log();
} finally {
    System.out.println(\"Operation completed\");
}",
        ))
        .with_viva(
            "\"We created custom exception hierarchy extending BaseException, and use \
            try-catch-finally blocks to handle errors like ValidationException for invalid \
            data and NotFoundException when entities are not found.\"",
        )
}

fn generics() -> SectionSpec {
    SectionSpec::new("10. Generics")
        .with_explanation(
            "Generics provide type safety and code reusability. We have generic interface \
            Repository<T> that works with any entity type. Searchable<T> and Sortable<T> are \
            generic interfaces that allow searching and sorting different types. \
            StudentRepository implements Repository<Student>, TeacherRepository implements \
            Repository<Teacher>, ensuring type safety.",
        )
        .with_references([
            "Repository.java",
            "Searchable.java",
            "Sortable.java",
            "UploadService.java (generic interfaces)",
            "StudentRepository.java",
            "TeacherRepository.java",
            "Student.java",
            "Teacher.java (implementations)",
        ])
        .with_excerpt(CodeBlock::labeled(
            "Code Snippet",
            "// Generic Interface
public interface Repository<T> {
    void add(T item) throws RepositoryException;
    void update(T item) throws RepositoryException;
    List<T> getAll() throws RepositoryException;
    List<T> find(String criteria);
}

// Generic implementation
public class StudentRepository implements Repository<Student> {
    private List<Student> students = new ArrayList<>();
   \x20
    @Override
    public void add(Student item) {
        students.add(item);
    }
   \x20
    @Override
    public List<Student> getAll() {
        return students;
    }
}

// Generic interfaces in domain classes
public class Student extends User\x20
    implements Searchable<Course>, Sortable<Course> {
   \x20
    @Override
    public List<Course> search(String criteria) {
        return courses.stream()
            .filter(c -> c.getCourseName().contains(criteria))
            .collect(Collectors.toList());
    }
}",
        ))
        .with_viva(
            "\"We use generics like Repository<T> and Searchable<T> to create type-safe, \
            reusable code that works with different entity types without code duplication.\"",
        )
}

fn collections_framework() -> SectionSpec {
    SectionSpec::new("11. Collections Framework")
        .with_explanation(
            "We extensively use ArrayList<T> to store students, teachers, courses, and other \
            entities. HashMap<K,V> is used for file metadata storage. We use enhanced \
            for-loops and Stream API for iteration, filtering, and sorting. Operations \
            include sorting courses by name/credits, filtering students by criteria, and \
            searching through collections.",
        )
        .with_references([
            "StudentRepository.java",
            "TeacherRepository.java",
            "CourseRepository.java",
            "Student.java",
            "Teacher.java",
            "Admin.java",
            "FileUploadService.java",
        ])
        .with_excerpt(CodeBlock::labeled(
            "Code Snippet",
            r#"// ArrayList usage
private List<Student> students = new ArrayList<>();
private List<Course> courses = new ArrayList<>();

students.add(new Student(...));
courses.add(new Course(...));

// HashMap usage
private Map<String, String> fileMetadata = new HashMap<>();
fileMetadata.put(fileName, filePath);

// Enhanced for-loop
for (Student student : students) {
    System.out.println(student.getName());
}

// Stream API with filtering and sorting
List<Course> result = courses.stream()
    .filter(c -> c.getCourseName().contains(criteria))
    .sorted((a, b) -> a.getCourseName().compareTo(
        b.getCourseName()))
    .collect(Collectors.toList());

// Sorting with Comparator
courses.sort((a, b) -> Integer.compare(
    a.getCreditHours(), b.getCreditHours()));

// Searching
List<Student> found = students.stream()
    .filter(s -> s.getName().contains(searchTerm))
    .collect(Collectors.toList());"#,
        ))
        .with_viva(
            "\"We use ArrayList for storing entities, HashMap for key-value pairs, and Stream \
            API with lambda expressions for filtering, sorting, and searching operations.\"",
        )
}

fn file_handling() -> SectionSpec {
    SectionSpec::new("12. File Handling")
        .with_explanation(
            "File handling is implemented using Jackson library for JSON \
            serialization/deserialization. Each repository reads from and writes to JSON \
            files (students.json, teachers.json, courses.json, etc.). ObjectMapper is used \
            to convert Java objects to JSON and vice versa. File upload service handles \
            storing uploaded files in the uploads/ directory with metadata management.",
        )
        .with_references([
            "StudentRepository.java",
            "TeacherRepository.java",
            "CourseRepository.java",
            "MessageRepository.java",
            "AssignmentRepository.java",
            "GradeRepository.java",
            "FileUploadService.java",
        ])
        .with_excerpt(CodeBlock::labeled(
            "Code Snippet",
            "// Reading from JSON file
private void loadAll() throws RepositoryException {
    File file = new File(\"students.json\");
    if (file.exists()) {
        List<Student> studentList = objectMapper.readValue(
            file, new TypeReference<List<Student>>() {});
        students.addAll(studentList);
    }
}

// Writing to JSON file
private void saveAll() throws RepositoryException {
    try {
        objectMapper.writerWithDefaultPrettyPrinter()
            .writeValue(new File(\"students.json\"), students);
    } catch (IOException e) {
        throw new RepositoryException(
            \"Failed to save students: \" + e.getMessage());
    }
}

// File upload handling
public void store(File file) throws UploadException {
    File uploadDir = new File(\"uploads/\");
    if (!uploadDir.exists()) {
        uploadDir.mkdirs();
    }
   \x20
    File destination = new File(uploadDir, file.getName());
    Files.copy(file.toPath(), destination.toPath());
}

// Metadata management
public void saveMetadata(File file) {
    UploadMetadata metadata = new UploadMetadata();
    metadata.setFileName(file.getName());
    metadata.setUploadDate(LocalDateTime.now());
    uploadRepository.add(metadata);
}",
        ))
        .with_viva(
            "\"We use Jackson ObjectMapper to read and write data to JSON files for \
            persistence, and FileUploadService to handle file uploads with metadata \
            storage.\"",
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_order() {
        let titles: Vec<String> = catalogue().into_iter().map(|s| s.title).collect();
        assert_eq!(
            titles,
            vec![
                "1. Classes & Objects",
                "2. Encapsulation",
                "3. Inheritance",
                "4. Polymorphism",
                "5. Abstraction",
                "6. Constructors",
                "7. Access Modifiers",
                "8. Packages",
                "9. Exception Handling",
                "10. Generics",
                "11. Collections Framework",
                "12. File Handling",
            ]
        );
    }

    #[test]
    fn test_every_section_is_complete() {
        for section in catalogue() {
            assert!(!section.explanation.is_empty(), "{}", section.title);
            assert!(!section.file_references.is_empty(), "{}", section.title);
            assert!(!section.code_excerpts.is_empty(), "{}", section.title);
            assert!(!section.viva.is_empty(), "{}", section.title);
        }
    }

    #[test]
    fn test_packages_has_two_excerpts() {
        let packages = packages();
        let labels: Vec<_> = packages
            .code_excerpts
            .iter()
            .map(|c| c.label.as_deref())
            .collect();
        assert_eq!(
            labels,
            vec![Some("Package Structure"), Some("Import Example")]
        );
    }

    #[test]
    fn test_code_keeps_trailing_spaces() {
        let classes = classes_and_objects();
        assert!(classes.code_excerpts[0]
            .text
            .starts_with("Student student = new Student(3001, \"Charlie Brown\", \n"));

        let polymorphism = polymorphism();
        assert!(polymorphism.code_excerpts[0]
            .text
            .lines()
            .any(|line| line == "// In Teacher.java  "));

        let exceptions = exception_handling();
        let text = &exceptions.code_excerpts[0].text;
        assert!(text.contains("System.err.println(\"[\" + timestamp + \"] \" + \n"));
        assert!(text.lines().any(|line| line == "    "));
    }

    #[test]
    fn test_access_modifiers_reference() {
        assert_eq!(
            access_modifiers().file_references,
            vec!["All classes in sms.domain, sms.data, sms.services packages"]
        );
    }

    #[test]
    fn test_prose_line_continuations_collapse() {
        let explanation = classes_and_objects().explanation;
        assert!(!explanation.contains('\n'));
        assert!(!explanation.contains("  "));
        assert!(explanation.starts_with("The LMS project contains"));
    }
}

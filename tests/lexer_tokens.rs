// Token serialization tests for the TyC lexer. Tokens render as KIND,LEXEME
// pairs joined by commas, with the bare EOF tag as the final element.

use tyc::parser::tokenize_outcome;

fn tokens(source: &str) -> String {
    tokenize_outcome(source)
}

#[test]
fn test_declaration_with_arithmetic() {
    assert_eq!(
        tokens("auto x = 5 + 3 * 2;"),
        "AUTO,auto,ID,x,ASSIGN,=,INTLIT,5,PLUS,+,INTLIT,3,MUL,*,INTLIT,2,SEMI,;,EOF"
    );
}

#[test]
fn test_function_definition() {
    assert_eq!(
        tokens("int add(int x, int y) { return x + y; }"),
        "INT,int,ID,add,LPAREN,(,INT,int,ID,x,COMMA,,,INT,int,ID,y,RPAREN,),\
         LBRACE,{,RETURN,return,ID,x,PLUS,+,ID,y,SEMI,;,RBRACE,},EOF"
    );
}

#[test]
fn test_mixed_declarations() {
    assert_eq!(
        tokens("int x = 10; float y = 3.14; string s = \"hello\";"),
        "INT,int,ID,x,ASSIGN,=,INTLIT,10,SEMI,;,FLOAT,float,ID,y,ASSIGN,=,\
         FLOATLIT,3.14,SEMI,;,STRING,string,ID,s,ASSIGN,=,STRINGLIT,hello,SEMI,;,EOF"
    );
}

#[test]
fn test_struct_definition() {
    assert_eq!(
        tokens("struct Point { int x; int y; };"),
        "STRUCT,struct,ID,Point,LBRACE,{,INT,int,ID,x,SEMI,;,INT,int,ID,y,SEMI,;,RBRACE,},SEMI,;,EOF"
    );
}

#[test]
fn test_keywords() {
    assert_eq!(tokens("int"), "INT,int,EOF");
    assert_eq!(tokens("float"), "FLOAT,float,EOF");
    assert_eq!(tokens("string"), "STRING,string,EOF");
    assert_eq!(tokens("auto"), "AUTO,auto,EOF");
    assert_eq!(tokens("void"), "VOID,void,EOF");
    assert_eq!(tokens("struct"), "STRUCT,struct,EOF");
    assert_eq!(tokens("if"), "IF,if,EOF");
    assert_eq!(tokens("else"), "ELSE,else,EOF");
    assert_eq!(tokens("for"), "FOR,for,EOF");
    assert_eq!(tokens("while"), "WHILE,while,EOF");
    assert_eq!(tokens("switch"), "SWITCH,switch,EOF");
    assert_eq!(tokens("case"), "CASE,case,EOF");
    assert_eq!(tokens("default"), "DEFAULT,default,EOF");
    assert_eq!(tokens("break"), "BREAK,break,EOF");
    assert_eq!(tokens("continue"), "CONTINUE,continue,EOF");
    assert_eq!(tokens("return"), "RETURN,return,EOF");
}

#[test]
fn test_keywords_are_case_sensitive() {
    assert_eq!(tokens("Int"), "ID,Int,EOF");
    assert_eq!(tokens("RETURN"), "ID,RETURN,EOF");
}

#[test]
fn test_operators() {
    assert_eq!(tokens("=="), "EQ,==,EOF");
    assert_eq!(tokens("!="), "NEQ,!=,EOF");
    assert_eq!(tokens("<="), "LE,<=,EOF");
    assert_eq!(tokens(">="), "GE,>=,EOF");
    assert_eq!(tokens("&&"), "AND,&&,EOF");
    assert_eq!(tokens("||"), "OR,||,EOF");
    assert_eq!(tokens("++"), "INC,++,EOF");
    assert_eq!(tokens("--"), "DEC,--,EOF");
    assert_eq!(tokens("="), "ASSIGN,=,EOF");
    assert_eq!(tokens("!"), "NOT,!,EOF");
    assert_eq!(tokens("<"), "LT,<,EOF");
    assert_eq!(tokens(">"), "GT,>,EOF");
    assert_eq!(tokens("+"), "PLUS,+,EOF");
    assert_eq!(tokens("-"), "MINUS,-,EOF");
    assert_eq!(tokens("*"), "MUL,*,EOF");
    assert_eq!(tokens("/"), "DIV,/,EOF");
    assert_eq!(tokens("%"), "MOD,%,EOF");
    assert_eq!(tokens("."), "DOT,.,EOF");
}

#[test]
fn test_separators() {
    assert_eq!(tokens("()"), "LPAREN,(,RPAREN,),EOF");
    assert_eq!(tokens("{}"), "LBRACE,{,RBRACE,},EOF");
    assert_eq!(tokens(";"), "SEMI,;,EOF");
    assert_eq!(tokens(","), "COMMA,,,EOF");
}

#[test]
fn test_integer_literals() {
    assert_eq!(tokens("0"), "INTLIT,0,EOF");
    assert_eq!(tokens("5"), "INTLIT,5,EOF");
    assert_eq!(tokens("12345"), "INTLIT,12345,EOF");
    assert_eq!(tokens("999999999"), "INTLIT,999999999,EOF");
    assert_eq!(tokens("00123"), "INTLIT,00123,EOF");
    assert_eq!(tokens("10 20 30"), "INTLIT,10,INTLIT,20,INTLIT,30,EOF");
}

#[test]
fn test_float_literals() {
    assert_eq!(tokens("3.14"), "FLOATLIT,3.14,EOF");
    assert_eq!(tokens("0.5"), "FLOATLIT,0.5,EOF");
    assert_eq!(tokens(".5"), "FLOATLIT,.5,EOF");
    assert_eq!(tokens("5."), "FLOATLIT,5.,EOF");
    assert_eq!(tokens("1.23e4"), "FLOATLIT,1.23e4,EOF");
    assert_eq!(tokens("5.67E-2"), "FLOATLIT,5.67E-2,EOF");
    assert_eq!(tokens("42e10"), "FLOATLIT,42e10,EOF");
    assert_eq!(tokens("1.5e+10"), "FLOATLIT,1.5e+10,EOF");
    assert_eq!(tokens("2.5e-5"), "FLOATLIT,2.5e-5,EOF");
}

#[test]
fn test_leading_zeros_preserved() {
    assert_eq!(
        tokens("000123 000.456 0.007890000"),
        "INTLIT,000123,FLOATLIT,000.456,FLOATLIT,0.007890000,EOF"
    );
}

#[test]
fn test_negative_numbers_are_two_tokens() {
    assert_eq!(tokens("-123"), "MINUS,-,INTLIT,123,EOF");
    assert_eq!(tokens("-0"), "MINUS,-,INTLIT,0,EOF");
    assert_eq!(tokens("--45"), "DEC,--,INTLIT,45,EOF");
    assert_eq!(tokens("-3.14"), "MINUS,-,FLOATLIT,3.14,EOF");
}

#[test]
fn test_string_literals() {
    assert_eq!(tokens("\"hello\""), "STRINGLIT,hello,EOF");
    assert_eq!(tokens("\"hello world\""), "STRINGLIT,hello world,EOF");
    assert_eq!(tokens("\"\""), "STRINGLIT,,EOF");
    assert_eq!(tokens("\"test123\""), "STRINGLIT,test123,EOF");
    assert_eq!(
        tokens("\"a\" \"b\" \"c\""),
        "STRINGLIT,a,STRINGLIT,b,STRINGLIT,c,EOF"
    );
}

#[test]
fn test_string_escapes_left_as_written() {
    assert_eq!(tokens(r#""hello\nworld""#), r"STRINGLIT,hello\nworld,EOF");
    assert_eq!(tokens(r#""hello\tworld""#), r"STRINGLIT,hello\tworld,EOF");
    assert_eq!(tokens(r#""hello\"world""#), r#"STRINGLIT,hello\"world,EOF"#);
    assert_eq!(tokens(r#""path\\file""#), r"STRINGLIT,path\\file,EOF");
    assert_eq!(
        tokens(r#""raumania\n\b\t\r""#),
        r"STRINGLIT,raumania\n\b\t\r,EOF"
    );
}

#[test]
fn test_string_special_characters() {
    assert_eq!(
        tokens(r#""!@#$%^&*()_+-=[]{}|;:',.<>/?`~""#),
        r"STRINGLIT,!@#$%^&*()_+-=[]{}|;:',.<>/?`~,EOF"
    );
}

#[test]
fn test_string_unicode() {
    assert_eq!(
        tokens("\"b\u{00e9} s\u{00f4} kho t\u{00e0}u\""),
        "STRINGLIT,b\u{00e9} s\u{00f4} kho t\u{00e0}u,EOF"
    );
    assert_eq!(tokens("\"\u{6c49}\u{5b57}\""), "STRINGLIT,\u{6c49}\u{5b57},EOF");
    assert_eq!(tokens("\"\u{1f600}\u{1f603}\""), "STRINGLIT,\u{1f600}\u{1f603},EOF");
}

#[test]
fn test_identifiers() {
    assert_eq!(tokens("variable"), "ID,variable,EOF");
    assert_eq!(tokens("_var"), "ID,_var,EOF");
    assert_eq!(tokens("var123"), "ID,var123,EOF");
    assert_eq!(tokens("myVariable"), "ID,myVariable,EOF");
    assert_eq!(tokens("MAX_VALUE"), "ID,MAX_VALUE,EOF");
    assert_eq!(tokens("x"), "ID,x,EOF");
    assert_eq!(tokens("a b c"), "ID,a,ID,b,ID,c,EOF");
}

#[test]
fn test_line_comment() {
    assert_eq!(tokens("// comment\nint x;"), "INT,int,ID,x,SEMI,;,EOF");
}

#[test]
fn test_block_comment() {
    assert_eq!(tokens("/* comment */int x;"), "INT,int,ID,x,SEMI,;,EOF");
    assert_eq!(tokens("/* line1\nline2 */int x;"), "INT,int,ID,x,SEMI,;,EOF");
}

#[test]
fn test_mixed_comments() {
    assert_eq!(
        tokens("int x; /* block comment */ // line comment\n x = 5;"),
        "INT,int,ID,x,SEMI,;,ID,x,ASSIGN,=,INTLIT,5,SEMI,;,EOF"
    );
}

#[test]
fn test_block_comments_do_not_nest() {
    assert_eq!(tokens("/**/*//**///***//*/*/**/"), "MUL,*,EOF");
}

#[test]
fn test_whitespace_forms() {
    assert_eq!(tokens("   int x"), "INT,int,ID,x,EOF");
    assert_eq!(tokens("int x   "), "INT,int,ID,x,EOF");
    assert_eq!(tokens("int\tx\t5"), "INT,int,ID,x,INTLIT,5,EOF");
    assert_eq!(tokens("int\nx\n5"), "INT,int,ID,x,INTLIT,5,EOF");
    assert_eq!(tokens(""), "EOF");
    assert_eq!(tokens("   \t  \n"), "EOF");
}

#[test]
fn test_expression_streams() {
    assert_eq!(tokens("x + y * z"), "ID,x,PLUS,+,ID,y,MUL,*,ID,z,EOF");
    assert_eq!(
        tokens("a + b * c / d % e"),
        "ID,a,PLUS,+,ID,b,MUL,*,ID,c,DIV,/,ID,d,MOD,%,ID,e,EOF"
    );
    assert_eq!(
        tokens("a < b <= c > d >= e == f != g"),
        "ID,a,LT,<,ID,b,LE,<=,ID,c,GT,>,ID,d,GE,>=,ID,e,EQ,==,ID,f,NEQ,!=,ID,g,EOF"
    );
    assert_eq!(tokens("a && b || c"), "ID,a,AND,&&,ID,b,OR,||,ID,c,EOF");
    assert_eq!(tokens("p.x"), "ID,p,DOT,.,ID,x,EOF");
    assert_eq!(
        tokens("func(a, b)"),
        "ID,func,LPAREN,(,ID,a,COMMA,,,ID,b,RPAREN,),EOF"
    );
    assert_eq!(tokens("x++ + y"), "ID,x,INC,++,PLUS,+,ID,y,EOF");
    assert_eq!(
        tokens("!x -y ++z --w"),
        "NOT,!,ID,x,MINUS,-,ID,y,INC,++,ID,z,DEC,--,ID,w,EOF"
    );
    assert_eq!(
        tokens("0 + 0 * 0"),
        "INTLIT,0,PLUS,+,INTLIT,0,MUL,*,INTLIT,0,EOF"
    );
}

#[test]
fn test_unterminated_string_error() {
    assert_eq!(
        tokens("\"Unclosed string literal"),
        "lexererr.UncloseString: Unclosed String: Unclosed string literal"
    );
}

#[test]
fn test_rendering_is_deterministic() {
    let source = "struct Point { int x; int y; };";
    assert_eq!(tokens(source), tokens(source));
}

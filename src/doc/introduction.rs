/*!
# Introductory Tutorial for Tiny BASIC

Tiny BASIC programs are plain text files. The compiler reads one file and
writes one C file, which any C compiler can then build.

<pre><code>&nbsp;$ tinybasic hello.bas -o hello.c
&nbsp;Tiny BASIC Compiler
&nbsp;Compiling completed.
&nbsp;$ cc hello.c -o hello
&nbsp;$ ./hello
&nbsp;Hello World
</code></pre>

Every statement sits on its own line. Blank lines are fine, and a `#`
starts a comment that runs to the end of the line.

```text
# hello.bas
PRINT "Hello World"
```

There is one data type, a floating point number. Variables come into
existence the first time they are assigned with `LET` or read with `INPUT`.
Using a variable before that is a compile error, even if the assignment
appears later in the file.

```text
LET count = 3
WHILE count > 0 REPEAT
    PRINT count
    LET count = count - 1
ENDWHILE
PRINT "Liftoff"
```

Numbers print with two decimal places, so the program above prints
`3.00`, `2.00`, `1.00` and then `Liftoff`.

Keywords are upper case. `print` is an ordinary variable name.

*/
